//! # mono-markup - a small markup-to-HTML engine
//!
//! Turns a lightweight markup dialect (emphasis, headings, blockquotes,
//! inline code, fenced code blocks and links) into HTML. Every construct is
//! recognized by its own scanner; scanners run in a fixed precedence order
//! over the document, and whatever an earlier scanner claims is invisible to
//! the later ones. Remaining text is grouped into paragraphs.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = mono_markup::transform("# Hello\n\nThis is **bold** text.")
//!   .expect("default shells always compile");
//!
//! assert!(html.contains("<b>bold</b>"));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use mono_markup::{MarkupOptionsBuilder, MarkupProcessor, Wrapper};
//!
//! let options = MarkupOptionsBuilder::new()
//!   .paragraph(Wrapper::new("<p>", "</p>"))
//!   .code_hint("mermaid", r#"<pre class="mermaid">{{ body }}</pre>"#)
//!   .build();
//!
//! let processor = MarkupProcessor::new(options).expect("templates parse");
//! let html = processor.render("```mermaid\ngraph TD\n```").expect("renders");
//! assert!(html.contains(r#"<pre class="mermaid">graph TD</pre>"#));
//! ```
//!
//! ## Custom catalogs
//!
//! ```rust
//! use mono_markup::{MarkupOptions, PairedTag, TagCatalog, Wrapper, transform_with};
//!
//! let mut catalog = TagCatalog::new()
//!   .with(PairedTag::wrapping("strike", &["~~"], Wrapper::new("<s>", "</s>")));
//! let html = transform_with(&mut catalog, &MarkupOptions::default(), "~~gone~~")
//!   .expect("no transformations to fail");
//! assert!(html.contains("<s>gone</s>"));
//! ```

pub mod catalog;
pub mod error;
pub mod processor;
pub mod scanner;
pub mod shells;
pub mod transform;
pub mod types;

pub use crate::{
  catalog::TagCatalog,
  error::{MarkupError, MarkupResult},
  processor::{MarkupProcessor, transform, transform_with},
  scanner::{FencedCodeTag, LinkTag, PairedTag, TagScanner},
  shells::{MarkupOptions, MarkupOptionsBuilder, MarkupShells, Wrapper},
  transform::{
    LinkTransformation,
    TemplateTransformation,
    Transformation,
    TransformationSet,
  },
  types::{Action, ActionQueue, Payload},
};
