//! Action and queue types shared by the scanners and the processing pipeline.
use std::{cmp::Reverse, fmt, mem, ops::Range, sync::Arc};

use crate::transform::Transformation;

/// What an action contributes to the output.
#[derive(Clone)]
pub enum Payload {
  /// Literal text spliced in before the anchor character.
  Insertion(String),

  /// Sub-rendering applied to the consumed range. Resolved eagerly by the
  /// orchestrator into an insertion at the start of that range.
  Transformation(Arc<dyn Transformation>),
}

impl fmt::Debug for Payload {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Insertion(text) => f.debug_tuple("Insertion").field(text).finish(),
      Self::Transformation(_) => f.write_str("Transformation(..)"),
    }
  }
}

/// A unit of output mutation anchored at a character index.
///
/// All indices are character offsets into the original document, never byte
/// offsets.
#[derive(Debug, Clone)]
pub struct Action {
  /// Index the action is emitted before.
  pub position: usize,

  /// Text or transformation produced by the action.
  pub payload: Payload,

  /// Half-open range of characters this action supersedes.
  pub consumed: Option<Range<usize>>,

  /// Whether this action delimits a block-level construct.
  pub block: bool,
}

impl Action {
  /// Insert `text` at `position`, suppressing the characters in `consumed`.
  #[must_use]
  pub fn insertion(
    position: usize,
    text: impl Into<String>,
    consumed: Range<usize>,
  ) -> Self {
    Self {
      position,
      payload: Payload::Insertion(text.into()),
      consumed: Some(consumed),
      block: false,
    }
  }

  /// Replace `captured` with the output of `transformation`.
  #[must_use]
  pub fn transformation(
    captured: Range<usize>,
    transformation: Arc<dyn Transformation>,
  ) -> Self {
    Self {
      position: captured.start,
      payload:  Payload::Transformation(transformation),
      consumed: Some(captured),
      block:    false,
    }
  }

  /// Mark the action as block-level (or not).
  #[must_use]
  pub fn with_block(mut self, block: bool) -> Self {
    self.block = block;
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Queued {
  discovered: usize,
  text:       String,
}

/// Resolved insertions keyed by character index.
///
/// Holds one slot per character plus a trailing slot for output that follows
/// the last character. Within a slot, insertions are emitted in reverse
/// discovery order, so the construct discovered last is emitted first.
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
  slots:      Vec<Vec<Queued>>,
  discovered: usize,
}

impl ActionQueue {
  /// Create a queue for a document of `len` characters.
  #[must_use]
  pub fn new(len: usize) -> Self {
    Self {
      slots:      vec![Vec::new(); len + 1],
      discovered: 0,
    }
  }

  /// Queue `text` at `position`. Positions past the trailing slot are
  /// clamped onto it.
  pub fn push(&mut self, position: usize, text: impl Into<String>) {
    let last = self.slots.len().saturating_sub(1);
    let discovered = self.discovered;
    self.discovered += 1;

    if let Some(slot) = self.slots.get_mut(position.min(last)) {
      slot.push(Queued {
        discovered,
        text: text.into(),
      });
    }
  }

  /// Total number of queued insertions.
  #[must_use]
  pub const fn discovered(&self) -> usize {
    self.discovered
  }

  /// Remove and return the insertions at `position` in emission order.
  pub fn take(&mut self, position: usize) -> Vec<String> {
    let Some(slot) = self.slots.get_mut(position) else {
      return Vec::new();
    };

    let mut queued = mem::take(slot);
    queued.sort_by_key(|q| Reverse(q.discovered));
    queued.into_iter().map(|q| q.text).collect()
  }
}
