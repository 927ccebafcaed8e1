//! Final output assembly.
use crate::{shells::Wrapper, types::ActionQueue};

/// Walk the document once, emitting queued insertions before each character
/// and dropping claimed characters.
pub(crate) fn render(
  chars: &[char],
  queue: &mut ActionQueue,
  skip: &[bool],
  container: &Wrapper,
) -> String {
  let mut html = String::with_capacity(
    chars.len() + container.open.len() + container.close.len(),
  );
  html.push_str(&container.open);

  for (index, &ch) in chars.iter().enumerate() {
    for text in queue.take(index) {
      html.push_str(&text);
    }
    if !skip[index] {
      html.push(ch);
    }
  }
  for text in queue.take(chars.len()) {
    html.push_str(&text);
  }

  html.push_str(&container.close);
  html
}
