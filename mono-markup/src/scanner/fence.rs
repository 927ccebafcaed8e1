//! Fenced code block scanner.
//!
//! A fence opens with ```` ``` ````, optionally followed by a language hint on
//! the same line, and closes at the next ```` ``` ````. The body is opaque:
//! the whole block is claimed at once, so no other scanner ever sees it.
use std::{collections::HashMap, sync::Arc};

use log::trace;

use super::{LineTracker, TagScanner, Window};
use crate::{
  transform::{FENCE, Transformation},
  types::Action,
};

/// Where the scanner is within a fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FenceState {
  /// Looking for an opening fence.
  #[default]
  New,
  /// Reading the hint on the opening fence line.
  Hint,
  /// Reading the body until the closing fence.
  Body,
}

/// Scanner for fenced code blocks, routing each block to a transformation
/// selected by its hint.
#[derive(Clone)]
pub struct FencedCodeTag {
  default: Arc<dyn Transformation>,
  hinted:  HashMap<String, Arc<dyn Transformation>>,

  state:  FenceState,
  window: Window,
  lines:  LineTracker,
  hint:   String,
  start:  usize,
}

impl FencedCodeTag {
  /// A scanner rendering every block through `default`.
  #[must_use]
  pub fn new(default: Arc<dyn Transformation>) -> Self {
    Self {
      default,
      hinted: HashMap::new(),
      state: FenceState::New,
      window: Window::with_capacity(FENCE.len()),
      lines: LineTracker::new(),
      hint: String::new(),
      start: 0,
    }
  }

  /// Render blocks whose hint is `hint` through `transformation`.
  #[must_use]
  pub fn with_hint(
    mut self,
    hint: impl Into<String>,
    transformation: Arc<dyn Transformation>,
  ) -> Self {
    self.hinted.insert(hint.into(), transformation);
    self
  }

  fn transformation(&self) -> Arc<dyn Transformation> {
    let hint = self.hint.trim();
    self.hinted.get(hint).map_or_else(
      || Arc::clone(&self.default),
      |transformation| {
        trace!("fence: using transformation for hint {hint:?}");
        Arc::clone(transformation)
      },
    )
  }
}

impl TagScanner for FencedCodeTag {
  fn name(&self) -> &str {
    "fenced-code"
  }

  fn consume(&mut self, index: usize, ch: char) -> Vec<Action> {
    self.window.push(self.lines.observe(index, ch));

    match self.state {
      FenceState::New => {
        if let Some(found) = self.window.ends_with(FENCE) {
          self.state = FenceState::Hint;
          self.start = found.range.start;
          self.hint.clear();
          self.window.clear();
        }
      },
      FenceState::Hint => {
        if ch == '\n' {
          self.state = FenceState::Body;
        } else {
          self.hint.push(ch);
        }
      },
      FenceState::Body => {
        if let Some(found) = self.window.ends_with(FENCE) {
          self.state = FenceState::New;
          self.window.clear();
          return vec![
            Action::transformation(
              self.start..found.range.end,
              self.transformation(),
            )
            .with_block(true),
          ];
        }
      },
    }

    Vec::new()
  }

  fn reset(&mut self) {
    self.state = FenceState::New;
    self.window.clear();
    self.lines = LineTracker::new();
    self.hint.clear();
    self.start = 0;
  }

  fn pending(&self) -> Option<usize> {
    (self.state != FenceState::New).then_some(self.start)
  }
}
