//! Ordered scanner catalogs.
//!
//! Catalog order is precedence: each scanner runs over the whole document
//! before the next one starts, and characters it claims are hidden from every
//! later scanner.
use std::sync::Arc;

use crate::{
  scanner::{FencedCodeTag, LinkTag, PairedTag, TagScanner},
  shells::MarkupShells,
  transform::TransformationSet,
};

/// An ordered list of scanners, one per markup construct.
#[derive(Default)]
pub struct TagCatalog {
  scanners: Vec<Box<dyn TagScanner>>,
}

impl TagCatalog {
  /// An empty catalog.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// The standard catalog: fenced code, inline code, headings 4 to 1,
  /// blockquote, link, bold-italic, bold and italic, in that order.
  #[must_use]
  pub fn standard(
    shells: &MarkupShells,
    transformations: &TransformationSet,
  ) -> Self {
    let fence = transformations.code_hints.iter().fold(
      FencedCodeTag::new(Arc::clone(&transformations.code_block)),
      |fence, (hint, transformation)| {
        fence.with_hint(hint.clone(), Arc::clone(transformation))
      },
    );

    let line = |name: &str, trigger: &str, wrapper: &crate::Wrapper| {
      PairedTag::wrapping(name, &[trigger], wrapper.clone())
        .closed_by(&["\n"])
        .at_line_start()
    };

    let mut catalog = Self::new().with(fence).with(PairedTag::wrapping(
      "inline-code",
      &["`"],
      shells.inline_code.clone(),
    ));
    // Deeper headings first, so `## ` is never read as `# ` plus text.
    for level in (1..=4).rev() {
      if let Some(wrapper) = shells.heading(level) {
        let trigger = format!("{} ", "#".repeat(usize::from(level)));
        catalog.push(Box::new(line(
          &format!("heading{level}"),
          &trigger,
          wrapper,
        )));
      }
    }

    catalog
      .with(line("blockquote", "> ", &shells.blockquote))
      .with(LinkTag::new(Arc::clone(&transformations.link)))
      .with(PairedTag::wrapping(
        "bold-italic",
        &["***", "___"],
        shells.bold_italic.clone(),
      ))
      .with(PairedTag::wrapping(
        "bold",
        &["**", "__"],
        shells.bold.clone(),
      ))
      .with(PairedTag::wrapping(
        "italic",
        &["*", "_"],
        shells.italic.clone(),
      ))
  }

  /// Append `scanner` with the lowest precedence so far.
  #[must_use]
  pub fn with(mut self, scanner: impl TagScanner + 'static) -> Self {
    self.push(Box::new(scanner));
    self
  }

  /// Append a boxed scanner with the lowest precedence so far.
  pub fn push(&mut self, scanner: Box<dyn TagScanner>) {
    self.scanners.push(scanner);
  }

  /// Discard per-document state in every scanner.
  pub fn reset(&mut self) {
    for scanner in &mut self.scanners {
      scanner.reset();
    }
  }

  /// Scanner names in precedence order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.scanners.iter().map(|scanner| scanner.name())
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.scanners.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.scanners.is_empty()
  }

  pub(crate) fn iter_mut(
    &mut self,
  ) -> impl Iterator<Item = &mut Box<dyn TagScanner>> {
    self.scanners.iter_mut()
  }
}
