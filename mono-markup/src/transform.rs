//! Sub-renderers applied to captured ranges.
//!
//! A [`Transformation`] receives the exact captured substring (delimiters
//! included) and returns replacement markup. The built-in transformations
//! render [`tera`] templates taken from [`MarkupShells`], so their output shape
//! is configuration rather than code.
use std::{collections::HashMap, sync::Arc};

use log::trace;
use tera::{Context, Tera};

use crate::{
  error::{MarkupError, MarkupResult},
  shells::MarkupShells,
};

/// Delimiter opening and closing a fenced code block.
pub const FENCE: &str = "```";

const LINK_TEMPLATE: &str = "link";
const CODE_BLOCK_TEMPLATE: &str = "code_block";

/// A named sub-rendering step applied to a captured text range.
pub trait Transformation: Send + Sync {
  /// Render the captured text. Errors abort the whole transformation.
  fn apply(&self, captured: &str) -> MarkupResult<String>;
}

impl<F> Transformation for F
where
  F: Fn(&str) -> MarkupResult<String> + Send + Sync,
{
  fn apply(&self, captured: &str) -> MarkupResult<String> {
    self(captured)
  }
}

/// Splits a fenced code capture into its hint and body.
///
/// The hint is the rest of the opening fence line, trimmed. The body is the
/// text between the first and the last line break of the capture, so a
/// closing fence line is dropped whole even when it starts with code. The body
/// is empty when the capture holds a single line break.
///
/// # Errors
///
/// Returns [`MarkupError::MalformedFence`] if `captured` does not start and
/// end with a fence or has no line break after the opening fence.
pub fn split_fence(captured: &str) -> MarkupResult<(&str, &str)> {
  let malformed = || MarkupError::MalformedFence(captured.to_string());

  let inner = captured
    .strip_prefix(FENCE)
    .and_then(|rest| rest.strip_suffix(FENCE))
    .ok_or_else(malformed)?;
  let first = inner.find('\n').ok_or_else(malformed)?;
  let last = inner.rfind('\n').unwrap_or(first);

  let body = if first == last {
    ""
  } else {
    &inner[first + 1..last]
  };
  Ok((inner[..first].trim(), body))
}

/// Splits a link capture `[text](url)` into `(text, url)` on the first `](`.
///
/// # Errors
///
/// Returns [`MarkupError::MalformedLink`] if the capture does not have the
/// `[text](url)` shape.
pub fn split_link(captured: &str) -> MarkupResult<(&str, &str)> {
  captured
    .strip_prefix('[')
    .and_then(|rest| rest.strip_suffix(')'))
    .and_then(|inner| inner.split_once("]("))
    .ok_or_else(|| MarkupError::MalformedLink(captured.to_string()))
}

/// Renders a fenced code capture through a tera template.
///
/// The template sees `body` (HTML-escaped code), `hint` (HTML-escaped
/// language hint) and `children` (the raw capture, fences included).
#[derive(Clone)]
pub struct TemplateTransformation {
  templates: Arc<Tera>,
  name:      String,
}

impl TemplateTransformation {
  #[must_use]
  pub fn new(templates: Arc<Tera>, name: impl Into<String>) -> Self {
    Self {
      templates,
      name: name.into(),
    }
  }
}

impl Transformation for TemplateTransformation {
  fn apply(&self, captured: &str) -> MarkupResult<String> {
    let (hint, body) = split_fence(captured)?;
    trace!("Rendering code block with template '{}'", self.name);

    let mut context = Context::new();
    context.insert("body", &html_escape::encode_text(body));
    context.insert("hint", &html_escape::encode_text(hint));
    context.insert("children", captured);

    Ok(self.templates.render(&self.name, &context)?)
  }
}

/// Renders `[text](url)` captures into an anchor element.
///
/// The template sees `href` (attribute-escaped URL) and `text` (the display
/// text as written).
#[derive(Clone)]
pub struct LinkTransformation {
  templates: Arc<Tera>,
}

impl LinkTransformation {
  #[must_use]
  pub const fn new(templates: Arc<Tera>) -> Self {
    Self { templates }
  }
}

impl Transformation for LinkTransformation {
  fn apply(&self, captured: &str) -> MarkupResult<String> {
    let (text, href) = split_link(captured)?;

    let mut context = Context::new();
    context.insert(
      "href",
      &html_escape::encode_double_quoted_attribute(href.trim()),
    );
    context.insert("text", text);

    Ok(self.templates.render(LINK_TEMPLATE, &context)?)
  }
}

/// The transformations a standard catalog needs, compiled once per processor.
#[derive(Clone)]
pub struct TransformationSet {
  pub(crate) link:       Arc<dyn Transformation>,
  pub(crate) code_block: Arc<dyn Transformation>,
  pub(crate) code_hints: HashMap<String, Arc<dyn Transformation>>,
}

impl TransformationSet {
  /// Compile the link and code block templates from `shells`.
  ///
  /// # Errors
  ///
  /// Returns [`MarkupError::Template`] if any template fails to parse.
  pub fn compile(shells: &MarkupShells) -> MarkupResult<Self> {
    let mut tera = Tera::default();
    // Escaping is applied to individual variables, never to whole shells.
    tera.autoescape_on(Vec::new());

    tera.add_raw_template(LINK_TEMPLATE, &shells.link)?;
    tera.add_raw_template(CODE_BLOCK_TEMPLATE, &shells.code_block)?;
    for (hint, template) in &shells.code_hints {
      tera.add_raw_template(&hint_template_name(hint), template)?;
    }

    let templates = Arc::new(tera);
    let code_hints = shells
      .code_hints
      .keys()
      .map(|hint| {
        let transformation: Arc<dyn Transformation> =
          Arc::new(TemplateTransformation::new(
            Arc::clone(&templates),
            hint_template_name(hint),
          ));
        (hint.clone(), transformation)
      })
      .collect();

    Ok(Self {
      link: Arc::new(LinkTransformation::new(Arc::clone(&templates))),
      code_block: Arc::new(TemplateTransformation::new(
        Arc::clone(&templates),
        CODE_BLOCK_TEMPLATE,
      )),
      code_hints,
    })
  }

  /// Register (or replace) the transformation used for fences with `hint`.
  pub fn set_code_hint(
    &mut self,
    hint: impl Into<String>,
    transformation: Arc<dyn Transformation>,
  ) {
    self.code_hints.insert(hint.into(), transformation);
  }

  /// Replace the transformation used for fences without a registered hint.
  pub fn set_code_block(&mut self, transformation: Arc<dyn Transformation>) {
    self.code_block = transformation;
  }

  /// Replace the link transformation.
  pub fn set_link(&mut self, transformation: Arc<dyn Transformation>) {
    self.link = transformation;
  }
}

fn hint_template_name(hint: &str) -> String {
  format!("{CODE_BLOCK_TEMPLATE}:{hint}")
}
