//! Tag scanners: per-construct state machines fed one character at a time.
//!
//! The orchestrator feeds each scanner every unclaimed character of the
//! document in ascending index order. Characters that an earlier scanner in
//! the catalog already claimed are never consumed; the scanner is only told
//! they went by, so it can keep track of line starts.
//!
//! - [`paired`]: symmetric or asymmetric delimiter pairs (`**x**`, `# x\n`)
//! - [`fence`]: fenced code blocks with an optional language hint
//! - [`link`]: `[text](url)` links
use std::{collections::VecDeque, ops::Range};

use crate::types::Action;

pub mod fence;
pub mod link;
pub mod paired;

pub use fence::FencedCodeTag;
pub use link::LinkTag;
pub use paired::PairedTag;

/// The unit of recognition for one markup construct.
pub trait TagScanner: Send {
  /// Short name used in log output.
  fn name(&self) -> &str;

  /// Feed the character at `index`. Returns the actions of a construct that
  /// completed on this character, if any.
  fn consume(&mut self, index: usize, ch: char) -> Vec<Action>;

  /// Called instead of [`consume`](TagScanner::consume) for a character an
  /// earlier scanner claimed. Only position tracking (such as line starts)
  /// may advance here; a claimed character never takes part in a construct.
  fn skipped(&mut self, _index: usize, _ch: char) {}

  /// Discard all per-document state.
  fn reset(&mut self);

  /// Start index of a construct that is open but not yet closed.
  fn pending(&self) -> Option<usize>;
}

/// A character seen by a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
  pub index:      usize,
  pub ch:         char,
  /// Only whitespace precedes this character on its line.
  pub line_start: bool,
}

/// A trigger found at the end of a [`Window`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TriggerMatch {
  pub range:      Range<usize>,
  pub line_start: bool,
}

/// Trailing buffer of the most recently seen characters.
#[derive(Debug, Clone, Default)]
pub(crate) struct Window {
  slots:    VecDeque<Slot>,
  capacity: usize,
}

impl Window {
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      slots: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Grow the window so it can hold a trigger of `len` characters.
  pub fn fit(&mut self, len: usize) {
    self.capacity = self.capacity.max(len);
  }

  pub fn push(&mut self, slot: Slot) {
    if self.capacity == 0 {
      return;
    }
    while self.slots.len() >= self.capacity {
      self.slots.pop_front();
    }
    self.slots.push_back(slot);
  }

  pub fn clear(&mut self) {
    self.slots.clear();
  }

  /// Returns the match if the window ends with `trigger` spelled out over
  /// consecutive document indices.
  pub fn ends_with(&self, trigger: &str) -> Option<TriggerMatch> {
    let len = trigger.chars().count();
    if len == 0 || len > self.slots.len() {
      return None;
    }

    let tail = self.slots.range(self.slots.len() - len..);
    let mut expected = None;
    for (slot, ch) in tail.clone().zip(trigger.chars()) {
      if slot.ch != ch || expected.is_some_and(|index| index != slot.index) {
        return None;
      }
      expected = Some(slot.index + 1);
    }

    let first = tail.clone().next()?;
    Some(TriggerMatch {
      range:      first.index..first.index + len,
      line_start: first.line_start,
    })
  }
}

/// Tracks whether only whitespace has been seen since the last line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineTracker {
  clean: bool,
}

impl LineTracker {
  pub const fn new() -> Self {
    Self { clean: true }
  }

  /// Record `ch` and return the slot describing it.
  pub fn observe(&mut self, index: usize, ch: char) -> Slot {
    let slot = Slot {
      index,
      ch,
      line_start: self.clean,
    };
    if ch == '\n' {
      self.clean = true;
    } else if !ch.is_whitespace() {
      self.clean = false;
    }
    slot
  }
}

impl Default for LineTracker {
  fn default() -> Self {
    Self::new()
  }
}
