//! `[text](url)` link scanner.
//!
//! A bare `]` that is not immediately followed by `(` abandons the link
//! without backtracking, so a `[` inside the abandoned text is never
//! reconsidered: in `[a][b](c)` only `[a]` is seen, and `[b](c)` stays plain
//! text.
use std::sync::Arc;

use log::trace;

use super::TagScanner;
use crate::{transform::Transformation, types::Action};

/// Scanner for inline links.
#[derive(Clone)]
pub struct LinkTag {
  transformation: Arc<dyn Transformation>,

  previous:  Option<(usize, char)>,
  hint_open: bool,
  link_open: bool,
  escaped:   bool,
  start:     usize,
}

impl LinkTag {
  /// A scanner rendering every link through `transformation`.
  #[must_use]
  pub const fn new(transformation: Arc<dyn Transformation>) -> Self {
    Self {
      transformation,
      previous: None,
      hint_open: false,
      link_open: false,
      escaped: false,
      start: 0,
    }
  }
}

impl TagScanner for LinkTag {
  fn name(&self) -> &str {
    "link"
  }

  fn consume(&mut self, index: usize, ch: char) -> Vec<Action> {
    let previous = self.previous.replace((index, ch));
    let after_bracket =
      matches!(previous, Some((at, ']')) if at + 1 == index);

    if self.link_open {
      if ch == ')' {
        self.link_open = false;
        trace!("link: closed {}..{}", self.start, index + 1);
        return vec![Action::transformation(
          self.start..index + 1,
          Arc::clone(&self.transformation),
        )];
      }
      return Vec::new();
    }

    if self.escaped {
      self.escaped = false;
      self.previous = None;
      return Vec::new();
    }
    if ch == '\\' {
      self.escaped = true;
      return Vec::new();
    }

    if self.hint_open {
      if after_bracket {
        if ch == '(' {
          self.link_open = true;
        } else {
          self.hint_open = false;
        }
      }
      return Vec::new();
    }

    if ch == '[' {
      self.hint_open = true;
      self.start = index;
    }
    Vec::new()
  }

  fn reset(&mut self) {
    self.previous = None;
    self.hint_open = false;
    self.link_open = false;
    self.escaped = false;
    self.start = 0;
  }

  fn pending(&self) -> Option<usize> {
    (self.hint_open || self.link_open).then_some(self.start)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::MarkupResult;

  fn tag() -> LinkTag {
    LinkTag::new(Arc::new(|captured: &str| -> MarkupResult<String> {
      Ok(captured.to_string())
    }))
  }

  fn ranges(text: &str) -> Vec<std::ops::Range<usize>> {
    let mut tag = tag();
    text
      .chars()
      .enumerate()
      .flat_map(|(i, ch)| tag.consume(i, ch))
      .filter_map(|action| action.consumed)
      .collect()
  }

  #[test]
  fn test_link_spans_brackets_and_parens() {
    assert_eq!(ranges("see [text](http://x) now"), vec![4..20]);
  }

  #[test]
  fn test_bare_bracket_abandons_link() {
    assert!(ranges("[text] (http://x)").is_empty());
    // No backtracking: the second link starts inside the abandoned text.
    assert!(ranges("[a][b](c)").is_empty());
    assert_eq!(ranges("[a] and [b](c)"), vec![8..14]);
  }

  #[test]
  fn test_escaped_brackets_are_ignored() {
    assert!(ranges(r"\[text](x)").is_empty());
    assert!(ranges(r"[text\](x)").is_empty());
  }

  #[test]
  fn test_unclosed_url_is_pending() {
    let mut tag = tag();
    for (i, ch) in "[a](b".chars().enumerate() {
      assert!(tag.consume(i, ch).is_empty());
    }
    assert_eq!(tag.pending(), Some(0));
  }

  #[test]
  fn test_multiline_hint() {
    assert_eq!(ranges("[a\nb](c)"), vec![0..8]);
  }
}
