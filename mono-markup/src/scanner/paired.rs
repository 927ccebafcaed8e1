//! Generic paired-delimiter scanner.
//!
//! Recognizes constructs of the form `<open>content<close>` using a trailing
//! window sized to the longest trigger. Covers emphasis (`**x**`, `_x_`),
//! inline code and line-based blocks such as headings (`# x\n`), where the
//! closing trigger differs from the opening one.
//!
//! A backslash escapes whatever character follows it, line breaks included:
//! in `# a\` followed by a line break, the heading does not close there and
//! runs on to the next unescaped line break, keeping the backslash.
use std::{ops::Range, sync::Arc};

use log::trace;

use super::{LineTracker, TagScanner, TriggerMatch, Window};
use crate::{shells::Wrapper, transform::Transformation, types::Action};

/// What a completed pair turns into.
#[derive(Clone)]
enum PairOutput {
  /// Replace the delimiters, keep the enclosed content.
  Wrap(Wrapper),
  /// Replace the whole construct with a transformation of it.
  Transform(Arc<dyn Transformation>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Opened {
  trigger: String,
  range:   Range<usize>,
}

/// Scanner for one delimiter pair, with any number of trigger variants.
///
/// # Examples
///
/// ```
/// use mono_markup::{PairedTag, TagScanner, Wrapper};
///
/// let mut bold = PairedTag::wrapping("bold", &["**", "__"], Wrapper::new("<b>", "</b>"));
/// let actions: Vec<_> = "**x**"
///   .chars()
///   .enumerate()
///   .flat_map(|(i, ch)| bold.consume(i, ch))
///   .collect();
/// assert_eq!(actions.len(), 2);
/// ```
#[derive(Clone)]
pub struct PairedTag {
  name:       String,
  opening:    Vec<String>,
  closing:    Vec<String>,
  line_start: bool,
  block:      bool,
  escapes:    bool,
  output:     PairOutput,

  window:  Window,
  lines:   LineTracker,
  escaped: bool,
  opened:  Option<Opened>,
}

impl PairedTag {
  /// A pair whose delimiters are replaced by `wrapper`.
  #[must_use]
  pub fn wrapping(
    name: impl Into<String>,
    triggers: &[&str],
    wrapper: Wrapper,
  ) -> Self {
    Self::with_output(name.into(), triggers, PairOutput::Wrap(wrapper))
  }

  /// A pair replaced as a whole by the output of `transformation`.
  #[must_use]
  pub fn transforming(
    name: impl Into<String>,
    triggers: &[&str],
    transformation: Arc<dyn Transformation>,
  ) -> Self {
    Self::with_output(
      name.into(),
      triggers,
      PairOutput::Transform(transformation),
    )
  }

  fn with_output(name: String, triggers: &[&str], output: PairOutput) -> Self {
    let mut tag = Self {
      name,
      opening: Vec::with_capacity(triggers.len()),
      closing: Vec::new(),
      line_start: false,
      block: false,
      escapes: true,
      output,
      window: Window::with_capacity(
        triggers.first().map_or(0, |t| t.chars().count()),
      ),
      lines: LineTracker::new(),
      escaped: false,
      opened: None,
    };
    for trigger in triggers {
      tag = tag.trigger(trigger);
    }
    tag
  }

  /// Register another opening trigger variant.
  #[must_use]
  pub fn trigger(mut self, trigger: &str) -> Self {
    self.window.fit(trigger.chars().count());
    self.opening.push(trigger.to_string());
    self
  }

  /// Close with `triggers` instead of the opening triggers.
  #[must_use]
  pub fn closed_by(mut self, triggers: &[&str]) -> Self {
    for trigger in triggers {
      self.window.fit(trigger.chars().count());
      self.closing.push((*trigger).to_string());
    }
    self
  }

  /// Only open when nothing but whitespace precedes the trigger on its line.
  /// Line-based constructs are block-level.
  #[must_use]
  pub const fn at_line_start(mut self) -> Self {
    self.line_start = true;
    self.block = true;
    self
  }

  /// Enable or disable backslash escaping (enabled by default).
  #[must_use]
  pub const fn escapes(mut self, enabled: bool) -> Self {
    self.escapes = enabled;
    self
  }

  const fn symmetric(&self) -> bool {
    self.closing.is_empty()
  }

  fn closers(&self) -> &[String] {
    if self.symmetric() {
      &self.opening
    } else {
      &self.closing
    }
  }

  fn find_opening(&self) -> Option<(String, TriggerMatch)> {
    self.opening.iter().find_map(|trigger| {
      self
        .window
        .ends_with(trigger)
        .filter(|found| !self.line_start || found.line_start)
        .map(|found| (trigger.clone(), found))
    })
  }

  fn find_closing(&self, opened: &Opened) -> Option<TriggerMatch> {
    self.closers().iter().find_map(|trigger| {
      // `*x_` must not close: with several variants, a symmetric pair only
      // closes on the variant that opened it.
      if self.symmetric() && self.opening.len() > 1 && *trigger != opened.trigger
      {
        return None;
      }
      self.window.ends_with(trigger).filter(|found| {
        found.range.start >= opened.range.end
          && (!self.symmetric() || found.range.start > opened.range.end)
      })
    })
  }

  fn complete(&self, opened: Opened, closing: Range<usize>) -> Vec<Action> {
    trace!(
      "{}: closed {}..{} (opened with {:?})",
      self.name, opened.range.start, closing.end, opened.trigger
    );

    match &self.output {
      PairOutput::Transform(transformation) => {
        vec![
          Action::transformation(
            opened.range.start..closing.end,
            Arc::clone(transformation),
          )
          .with_block(self.block),
        ]
      },
      PairOutput::Wrap(wrapper) => {
        vec![
          Action::insertion(
            opened.range.start,
            wrapper.open.clone(),
            opened.range,
          )
          .with_block(self.block),
          Action::insertion(closing.start, wrapper.close.clone(), closing)
            .with_block(self.block),
        ]
      },
    }
  }
}

impl TagScanner for PairedTag {
  fn name(&self) -> &str {
    &self.name
  }

  fn consume(&mut self, index: usize, ch: char) -> Vec<Action> {
    let slot = self.lines.observe(index, ch);

    if self.escaped {
      // The escaped character must not take part in any trigger.
      self.escaped = false;
      self.window.clear();
      return Vec::new();
    }

    self.window.push(slot);
    if self.escapes && ch == '\\' {
      self.escaped = true;
      return Vec::new();
    }

    match self.opened.take() {
      None => {
        if let Some((trigger, found)) = self.find_opening() {
          self.window.clear();
          self.opened = Some(Opened {
            trigger,
            range: found.range,
          });
        }
        Vec::new()
      },
      Some(opened) => {
        if let Some(found) = self.find_closing(&opened) {
          self.window.clear();
          self.complete(opened, found.range)
        } else {
          self.opened = Some(opened);
          Vec::new()
        }
      },
    }
  }

  fn skipped(&mut self, index: usize, ch: char) {
    self.lines.observe(index, ch);
    self.escaped = false;
  }

  fn reset(&mut self) {
    self.window.clear();
    self.lines = LineTracker::new();
    self.escaped = false;
    self.opened = None;
  }

  fn pending(&self) -> Option<usize> {
    self.opened.as_ref().map(|opened| opened.range.start)
  }
}
