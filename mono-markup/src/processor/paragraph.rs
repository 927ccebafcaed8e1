//! Paragraph synthesis over the text left outside block constructs.
//!
//! Paragraph boundaries only respect block constructs. An inline pair that
//! spans a blank line is split across two paragraphs, so `` `a\n\nb` ``
//! renders its code tags inside different `<p>` elements. Fenced code is
//! block-level and never split.
use log::trace;

use crate::{shells::Wrapper, types::ActionQueue};

/// Wrap each run of non-block text in `paragraph`.
///
/// A run ends at a block character, at a blank line or at the end of the
/// document. Surrounding whitespace stays outside the paragraph, and runs
/// holding nothing but whitespace are left alone.
pub(crate) fn synthesize(
  queue: &mut ActionQueue,
  block: &[bool],
  chars: &[char],
  paragraph: &Wrapper,
) {
  let len = chars.len();
  let mut start = 0;

  while start < len {
    if block[start] {
      start += 1;
      continue;
    }

    let mut end = start;
    while end < len && !block[end] && !blank_line_at(chars, end) {
      end += 1;
    }
    wrap(queue, chars, start, end, paragraph);

    // Step over the first line break of a blank line.
    start = if end < len && !block[end] { end + 1 } else { end };
  }
}

fn blank_line_at(chars: &[char], index: usize) -> bool {
  chars[index] == '\n' && chars.get(index + 1) == Some(&'\n')
}

fn wrap(
  queue: &mut ActionQueue,
  chars: &[char],
  start: usize,
  end: usize,
  paragraph: &Wrapper,
) {
  let run = &chars[start..end];
  let Some(first) = run.iter().position(|ch| !ch.is_whitespace()) else {
    return;
  };
  let last = run
    .iter()
    .rposition(|ch| !ch.is_whitespace())
    .unwrap_or(first);

  trace!("Paragraph at {}..{}", start + first, start + last + 1);
  queue.push(start + first, paragraph.open.clone());
  queue.push(start + last + 1, paragraph.close.clone());
}
