//! Runs every scanner of a catalog over the document and collects the
//! resolved actions.
use std::ops::Range;

use log::{debug, trace};

use crate::{
  catalog::TagCatalog,
  error::MarkupResult,
  types::{Action, ActionQueue, Payload},
};

/// Everything the scanner passes produced for one document.
#[derive(Debug, Clone)]
pub(crate) struct Passes {
  /// Resolved insertions keyed by anchor index.
  pub queue: ActionQueue,
  /// Claimed characters, suppressed from the output.
  pub skip:  Vec<bool>,
  /// Characters that belong to a block-level construct.
  pub block: Vec<bool>,
}

impl Passes {
  fn new(len: usize) -> Self {
    Self {
      queue: ActionQueue::new(len),
      skip:  vec![false; len],
      block: vec![false; len],
    }
  }

  fn clamp(&self, range: &Range<usize>) -> Range<usize> {
    let len = self.skip.len();
    range.start.min(len)..range.end.min(len)
  }

  /// Record the actions returned by one `consume` call.
  fn record(&mut self, actions: Vec<Action>, chars: &[char]) -> MarkupResult<()> {
    let block = actions.iter().any(|action| action.block);
    let mut span: Option<Range<usize>> = None;

    for action in actions {
      let consumed = action
        .consumed
        .as_ref()
        .map_or(action.position..action.position, |range| self.clamp(range));

      for claimed in &mut self.skip[consumed.clone()] {
        *claimed = true;
      }
      span = Some(match span {
        Some(span) => span.start.min(consumed.start)..span.end.max(consumed.end),
        None => consumed.clone(),
      });

      let text = match action.payload {
        Payload::Insertion(text) => text,
        Payload::Transformation(transformation) => {
          let captured: String = chars[consumed].iter().collect();
          transformation.apply(&captured)?
        },
      };
      self.queue.push(action.position, text);
    }

    if block && let Some(span) = span {
      for marked in &mut self.block[span] {
        *marked = true;
      }
    }
    Ok(())
  }
}

/// Feed every unclaimed character to each scanner in catalog order.
///
/// Transformations are applied as soon as their construct completes, so the
/// returned queue holds plain text only.
///
/// # Errors
///
/// Returns the first error raised by a transformation.
pub(crate) fn run(
  catalog: &mut TagCatalog,
  chars: &[char],
) -> MarkupResult<Passes> {
  let mut passes = Passes::new(chars.len());

  for scanner in catalog.iter_mut() {
    let before = passes.queue.discovered();

    for (index, &ch) in chars.iter().enumerate() {
      if passes.skip[index] {
        scanner.skipped(index, ch);
        continue;
      }
      let actions = scanner.consume(index, ch);
      if !actions.is_empty() {
        passes.record(actions, chars)?;
      }
    }

    debug!(
      "Scanner '{}' produced {} insertions",
      scanner.name(),
      passes.queue.discovered() - before
    );
    if let Some(start) = scanner.pending() {
      debug!(
        "Scanner '{}' left a construct open at {start}, keeping it verbatim",
        scanner.name()
      );
    }
  }

  Ok(passes)
}

/// Claim every unclaimed backslash that escapes unclaimed ASCII punctuation.
pub(crate) fn resolve_escapes(passes: &mut Passes, chars: &[char]) {
  let mut index = 0;
  while index + 1 < chars.len() {
    let escapes = chars[index] == '\\'
      && chars[index + 1].is_ascii_punctuation()
      && !passes.skip[index]
      && !passes.skip[index + 1];

    if escapes {
      trace!("Dropping escape before {:?} at {index}", chars[index + 1]);
      passes.skip[index] = true;
      index += 2;
    } else {
      index += 1;
    }
  }
}
