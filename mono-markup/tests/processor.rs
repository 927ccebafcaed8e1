#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]
use std::{
  sync::{Arc, Mutex},
  thread,
};

use mono_markup::{
  Action,
  MarkupError,
  MarkupOptions,
  MarkupOptionsBuilder,
  MarkupProcessor,
  MarkupResult,
  MarkupShells,
  PairedTag,
  TagCatalog,
  TagScanner,
  Wrapper,
  transform_with,
};

const DOCUMENT: &str = "# Notes\n\nSome **bold**, some _italic_ and `code`.\n\n> \
                        quoted *line*\n\n```rust\nfn main() {}\n```\n\nSee \
                        [the docs](https://example.com/docs).\n";

/// Records every index it is fed, to observe what earlier scanners claimed.
struct Recorder {
  seen: Arc<Mutex<Vec<usize>>>,
}

impl TagScanner for Recorder {
  fn name(&self) -> &str {
    "recorder"
  }

  fn consume(&mut self, index: usize, _ch: char) -> Vec<Action> {
    self.seen.lock().unwrap().push(index);
    Vec::new()
  }

  fn reset(&mut self) {}

  fn pending(&self) -> Option<usize> {
    None
  }
}

#[test]
fn test_render_is_deterministic() {
  let processor =
    MarkupProcessor::new(MarkupOptions::default()).expect("default shells");

  let first = processor.render(DOCUMENT).expect("renders");
  let second = processor.render(DOCUMENT).expect("renders");
  assert_eq!(first, second);
  assert_eq!(first, mono_markup::transform(DOCUMENT).expect("renders"));
}

#[test]
fn test_concurrent_renders_agree() {
  let processor =
    MarkupProcessor::new(MarkupOptions::default()).expect("default shells");
  let expected = processor.render(DOCUMENT).expect("renders");

  let results: Vec<String> = thread::scope(|scope| {
    let handles: Vec<_> = (0..8)
      .map(|_| scope.spawn(|| processor.render(DOCUMENT).expect("renders")))
      .collect();
    handles
      .into_iter()
      .map(|handle| handle.join().expect("render thread panicked"))
      .collect()
  });

  assert!(results.iter().all(|html| *html == expected));
}

#[test]
fn test_claimed_indices_are_never_reexamined() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let mut catalog = TagCatalog::new()
    .with(PairedTag::wrapping("bold", &["**"], Wrapper::new("<b>", "</b>")))
    .with(Recorder {
      seen: Arc::clone(&seen),
    });

  transform_with(&mut catalog, &MarkupOptions::default(), "a**b**c")
    .expect("renders");

  assert_eq!(*seen.lock().unwrap(), vec![0, 3, 6]);
}

#[test]
fn test_failing_transformation_aborts_render() {
  let processor = MarkupProcessor::new(MarkupOptions::default())
    .expect("default shells")
    .with_code_transformation(
      "fail",
      Arc::new(|_: &str| -> MarkupResult<String> {
        Err(MarkupError::Transformation("refused".to_string()))
      }),
    );

  let result = processor.render("before\n```fail\nbody\n```\nafter");
  assert!(matches!(result, Err(MarkupError::Transformation(_))));
  assert!(processor.render("```\nbody\n```").is_ok());
}

#[test]
fn test_invalid_template_is_rejected_up_front() {
  let options = MarkupOptions {
    shells: MarkupShells {
      code_block: "{% if %}".to_string(),
      ..MarkupShells::default()
    },
    ..MarkupOptions::default()
  };

  assert!(matches!(
    MarkupProcessor::new(options),
    Err(MarkupError::Template(_))
  ));
}

#[test]
fn test_catalog_can_be_reused() {
  let processor =
    MarkupProcessor::new(MarkupOptions::default()).expect("default shells");
  let mut catalog = processor.catalog();

  let first = transform_with(&mut catalog, processor.options(), "*open")
    .expect("renders");
  let second = transform_with(&mut catalog, processor.options(), "x *y*")
    .expect("renders");

  assert!(first.contains("*open"));
  assert_eq!(second, processor.render("x *y*").expect("renders"));
}

#[test]
fn test_options_from_toml() {
  let options: MarkupOptions = toml::from_str(
    r#"
[shells.container]
open = "<article>"
close = "</article>"

[shells.paragraph]
open = "<p>"
close = "</p>"
"#,
  )
  .expect("options parse");
  let processor = MarkupProcessor::new(options).expect("shells compile");

  assert_eq!(
    processor.render("*hi*").expect("renders"),
    "<article><p><i>hi</i></p></article>"
  );
}

#[test]
fn test_builder_options() {
  let options = MarkupOptionsBuilder::new()
    .container(Wrapper::new("", ""))
    .paragraph(Wrapper::new("", ""))
    .strip_escapes(false)
    .build();
  let processor = MarkupProcessor::new(options).expect("shells compile");

  assert_eq!(processor.render(r"\_x\_").expect("renders"), r"\_x\_");
}
