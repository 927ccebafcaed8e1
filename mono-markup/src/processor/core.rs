//! Core implementation of the markup processor.
//!
//! This module contains `MarkupProcessor` and the processing pipeline shared
//! by every entry point: scanner passes, escape resolution, paragraph
//! synthesis and rendering.
use std::sync::{Arc, LazyLock};

use log::debug;

use super::{orchestrate, paragraph, render};
use crate::{
  catalog::TagCatalog,
  error::MarkupResult,
  shells::MarkupOptions,
  transform::{Transformation, TransformationSet},
};

/// Processor behind [`transform`], compiled on first use.
static DEFAULT_PROCESSOR: LazyLock<Option<MarkupProcessor>> =
  LazyLock::new(|| MarkupProcessor::new(MarkupOptions::default()).ok());

/// Main markup processor.
///
/// Holds the options and the compiled templates. Every [`render`] call builds
/// a fresh catalog, so one processor can be shared freely between threads.
///
/// [`render`]: MarkupProcessor::render
#[derive(Clone)]
pub struct MarkupProcessor {
  options:         MarkupOptions,
  transformations: TransformationSet,
}

impl MarkupProcessor {
  /// Create a processor, compiling the template shells in `options`.
  ///
  /// # Errors
  ///
  /// Returns [`crate::MarkupError::Template`] if a link or code block template
  /// does not parse.
  pub fn new(options: MarkupOptions) -> MarkupResult<Self> {
    let transformations = TransformationSet::compile(&options.shells)?;
    debug!(
      "Compiled markup templates ({} code hints)",
      options.shells.code_hints.len()
    );

    Ok(Self {
      options,
      transformations,
    })
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkupOptions {
    &self.options
  }

  /// Render fences whose hint is `hint` through `transformation`, replacing
  /// any template registered for that hint.
  #[must_use]
  pub fn with_code_transformation(
    mut self,
    hint: impl Into<String>,
    transformation: Arc<dyn Transformation>,
  ) -> Self {
    self.transformations.set_code_hint(hint, transformation);
    self
  }

  /// Render fences without a registered hint through `transformation`.
  #[must_use]
  pub fn with_default_code_transformation(
    mut self,
    transformation: Arc<dyn Transformation>,
  ) -> Self {
    self.transformations.set_code_block(transformation);
    self
  }

  /// Render links through `transformation` instead of the link template.
  #[must_use]
  pub fn with_link_transformation(
    mut self,
    transformation: Arc<dyn Transformation>,
  ) -> Self {
    self.transformations.set_link(transformation);
    self
  }

  /// A fresh standard catalog built from this processor's shells.
  #[must_use]
  pub fn catalog(&self) -> TagCatalog {
    TagCatalog::standard(&self.options.shells, &self.transformations)
  }

  /// Render `text` to HTML.
  ///
  /// # Errors
  ///
  /// Returns the first error raised by a transformation. No partial output
  /// is produced.
  pub fn render(&self, text: &str) -> MarkupResult<String> {
    let mut catalog = self.catalog();
    process(&mut catalog, &self.options, text)
  }
}

/// Render `text` with the default options.
///
/// The default templates are compiled once and shared by every call.
///
/// # Errors
///
/// Returns the first error raised by a transformation.
///
/// # Examples
///
/// ```
/// let html = mono_markup::transform("**bold** text").expect("renders");
/// assert!(html.contains("<b>bold</b>"));
/// ```
pub fn transform(text: &str) -> MarkupResult<String> {
  match DEFAULT_PROCESSOR.as_ref() {
    Some(processor) => processor.render(text),
    // Compiling again surfaces the template error itself.
    None => MarkupProcessor::new(MarkupOptions::default())?.render(text),
  }
}

/// Render `text` with a caller-built catalog.
///
/// The catalog is reset first, so it can be reused across calls. Only the
/// escape setting and the paragraph and container shells of `options` apply
/// here; every other shell is already baked into the catalog's scanners.
///
/// # Errors
///
/// Returns the first error raised by a transformation.
pub fn transform_with(
  catalog: &mut TagCatalog,
  options: &MarkupOptions,
  text: &str,
) -> MarkupResult<String> {
  catalog.reset();
  process(catalog, options, text)
}

fn process(
  catalog: &mut TagCatalog,
  options: &MarkupOptions,
  text: &str,
) -> MarkupResult<String> {
  let chars: Vec<char> = text.chars().collect();
  debug!(
    "Transforming {} characters with {} scanners",
    chars.len(),
    catalog.len()
  );

  let mut passes = orchestrate::run(catalog, &chars)?;
  if options.strip_escapes {
    orchestrate::resolve_escapes(&mut passes, &chars);
  }

  paragraph::synthesize(
    &mut passes.queue,
    &passes.block,
    &chars,
    &options.shells.paragraph,
  );
  Ok(render::render(
    &chars,
    &mut passes.queue,
    &passes.skip,
    &options.shells.container,
  ))
}
