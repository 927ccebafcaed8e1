//! Markup shells and processor options.
//!
//! Shells are the literal markup wrapped around each construct. They are
//! plain configuration: every field has a built-in default, and a partial
//! TOML (or any serde format) document overrides only the fields it names.
//!
//! ```
//! use mono_markup::{MarkupOptions, Wrapper};
//!
//! let mut options = MarkupOptions::default();
//! options.shells.bold = Wrapper::new("<strong>", "</strong>");
//! options.strip_escapes = false;
//! ```
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An opening/closing markup pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapper {
  pub open:  String,
  pub close: String,
}

impl Wrapper {
  #[must_use]
  pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
    Self {
      open:  open.into(),
      close: close.into(),
    }
  }
}

/// Markup emitted for every construct the standard catalog recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupShells {
  /// Wraps the whole rendered document.
  pub container: Wrapper,

  /// Wraps each synthesized paragraph.
  pub paragraph: Wrapper,

  /// `# ` headings.
  pub heading1: Wrapper,

  /// `## ` headings.
  pub heading2: Wrapper,

  /// `### ` headings.
  pub heading3: Wrapper,

  /// `#### ` headings.
  pub heading4: Wrapper,

  /// `> ` lines.
  pub blockquote: Wrapper,

  /// `***x***` and `___x___`.
  pub bold_italic: Wrapper,

  /// `**x**` and `__x__`.
  pub bold: Wrapper,

  /// `*x*` and `_x_`.
  pub italic: Wrapper,

  /// `` `x` ``.
  pub inline_code: Wrapper,

  /// Tera template for `[text](url)`. Variables: `href`, `text`.
  pub link: String,

  /// Tera template for fenced code without a dedicated hint template.
  /// Variables: `body`, `hint`, `children`.
  pub code_block: String,

  /// Tera templates for fenced code, keyed by the fence's hint.
  pub code_hints: BTreeMap<String, String>,
}

impl MarkupShells {
  /// Heading shell for `level` (1-4).
  #[must_use]
  pub const fn heading(&self, level: u8) -> Option<&Wrapper> {
    match level {
      1 => Some(&self.heading1),
      2 => Some(&self.heading2),
      3 => Some(&self.heading3),
      4 => Some(&self.heading4),
      _ => None,
    }
  }
}

impl Default for MarkupShells {
  fn default() -> Self {
    Self {
      container:   Wrapper::new("<div>\n", "\n</div>"),
      paragraph:   Wrapper::new(
        r#"<p class="leading-5 [&:not(:first-child)]:mt-5">"#,
        "</p>",
      ),
      heading1:    Wrapper::new(
        r#"<h1 class="scroll-m-20 text-center text-4xl font-extrabold tracking-tight text-balance mt-6 first:mt-0">"#,
        "</h1>\n",
      ),
      heading2:    Wrapper::new(
        r#"<h2 class="scroll-m-20 border-b pb-2 text-3xl font-semibold tracking-tight mt-6 first:mt-0">"#,
        "</h2>\n",
      ),
      heading3:    Wrapper::new(
        r#"<h3 class="scroll-m-20 text-2xl font-semibold tracking-tight mt-5 first:mt-0">"#,
        "</h3>\n",
      ),
      heading4:    Wrapper::new(
        r#"<h4 class="scroll-m-20 text-xl font-semibold tracking-tight mt-5 first:mt-0">"#,
        "</h4>\n",
      ),
      blockquote:  Wrapper::new(
        r#"<blockquote class="mt-5 border-l-2 pl-2 italic">"#,
        "</blockquote>\n",
      ),
      bold_italic: Wrapper::new("<b><i>", "</i></b>"),
      bold:        Wrapper::new("<b>", "</b>"),
      italic:      Wrapper::new("<i>", "</i>"),
      inline_code: Wrapper::new(
        r#"<code class="bg-muted relative rounded px-[0.3rem] py-[0.2rem] font-mono text-sm font-semibold">"#,
        "</code>",
      ),
      link:        r#"<a class="font-medium text-primary underline underline-offset-4" href="{{ href }}">{{ text }}</a>"#
        .to_string(),
      code_block:  r#"<div class="bg-muted relative rounded mt-5 first:mt-0"><pre class="font-mono text-sm p-[0.5rem]"><code>{{ body }}</code></pre></div>"#
        .to_string(),
      code_hints:  BTreeMap::new(),
    }
  }
}

/// Options for configuring the markup processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupOptions {
  /// Drop a backslash that escapes ASCII punctuation, so `\*` renders `*`.
  pub strip_escapes: bool,

  /// Markup emitted around each construct.
  pub shells: MarkupShells,
}

impl Default for MarkupOptions {
  fn default() -> Self {
    Self {
      strip_escapes: true,
      shells:        MarkupShells::default(),
    }
  }
}

/// Builder for constructing `MarkupOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct MarkupOptionsBuilder {
  options: MarkupOptions,
}

impl MarkupOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Enable or disable escape stripping.
  #[must_use]
  pub const fn strip_escapes(mut self, enabled: bool) -> Self {
    self.options.strip_escapes = enabled;
    self
  }

  /// Set the paragraph wrapper.
  #[must_use]
  pub fn paragraph(mut self, wrapper: Wrapper) -> Self {
    self.options.shells.paragraph = wrapper;
    self
  }

  /// Set the document container.
  #[must_use]
  pub fn container(mut self, wrapper: Wrapper) -> Self {
    self.options.shells.container = wrapper;
    self
  }

  /// Register a tera template for fences whose hint is `hint`.
  #[must_use]
  pub fn code_hint(
    mut self,
    hint: impl Into<String>,
    template: impl Into<String>,
  ) -> Self {
    self
      .options
      .shells
      .code_hints
      .insert(hint.into(), template.into());
    self
  }

  /// Build the final `MarkupOptions`.
  #[must_use]
  pub fn build(self) -> MarkupOptions {
    self.options
  }
}
