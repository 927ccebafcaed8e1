#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]
use mono_markup::{
  MarkupOptions,
  MarkupProcessor,
  MarkupShells,
  Wrapper,
};

/// Check if HTML output contains all expected substrings.
fn assert_html_contains(html: &str, expected: &[&str]) {
  for &needle in expected {
    assert!(
      html.contains(needle),
      "Expected HTML to contain '{needle}', but it did not.\nFull \
       HTML:\n{html}"
    );
  }
}

/// Options with class-free shells and no container, so whole outputs can be
/// compared.
fn plain_options() -> MarkupOptions {
  MarkupOptions {
    strip_escapes: true,
    shells:        MarkupShells {
      container: Wrapper::new("", ""),
      paragraph: Wrapper::new("<p>", "</p>"),
      heading1: Wrapper::new("<h1>", "</h1>\n"),
      heading2: Wrapper::new("<h2>", "</h2>\n"),
      heading3: Wrapper::new("<h3>", "</h3>\n"),
      heading4: Wrapper::new("<h4>", "</h4>\n"),
      blockquote: Wrapper::new("<blockquote>", "</blockquote>\n"),
      inline_code: Wrapper::new("<code>", "</code>"),
      link: r#"<a href="{{ href }}">{{ text }}</a>"#.to_string(),
      code_block: "<pre><code>{{ body }}</code></pre>".to_string(),
      ..MarkupShells::default()
    },
  }
}

fn plain_html(text: &str) -> String {
  MarkupProcessor::new(plain_options())
    .expect("plain shells should compile")
    .render(text)
    .expect("render should succeed")
}

#[test]
fn test_plain_text_only_gains_shells() {
  let shells = MarkupShells::default();
  let html = mono_markup::transform("just some words").expect("renders");

  assert_eq!(
    html,
    format!(
      "{}{}just some words{}{}",
      shells.container.open,
      shells.paragraph.open,
      shells.paragraph.close,
      shells.container.close
    )
  );
}

#[test]
fn test_default_shells() {
  let html = mono_markup::transform("# Title\n\nSome *soft* `code`.")
    .expect("renders");

  assert!(html.starts_with("<div>\n"));
  assert!(html.ends_with("\n</div>"));
  assert_html_contains(&html, &[
    r#"<h1 class="scroll-m-20"#,
    "Title</h1>\n",
    r#"<p class="leading-5"#,
    "<i>soft</i>",
    r#"<code class="bg-muted"#,
  ]);
}

#[test]
fn test_emphasis() {
  assert_eq!(plain_html("*it*"), "<p><i>it</i></p>");
  assert_eq!(plain_html("**bold**"), "<p><b>bold</b></p>");
  assert_eq!(plain_html("***both***"), "<p><b><i>both</i></b></p>");
  assert_eq!(
    plain_html("__bold__ and _it_"),
    "<p><b>bold</b> and <i>it</i></p>"
  );
}

#[test]
fn test_nested_emphasis() {
  assert_eq!(plain_html("**_x_**"), "<p><b><i>x</i></b></p>");
}

#[test]
fn test_mismatched_variants_stay_verbatim() {
  assert_eq!(plain_html("*x_"), "<p>*x_</p>");
}

#[test]
fn test_unclosed_constructs_stay_verbatim() {
  assert_eq!(plain_html("*no close"), "<p>*no close</p>");
  assert_eq!(plain_html("[a](b"), "<p>[a](b</p>");
  assert_eq!(plain_html("# no line break"), "<p># no line break</p>");

  let html = plain_html("```\nnever closed");
  assert!(!html.contains("<pre>"), "unexpected code block in {html}");
  assert_html_contains(&html, &["never closed</p>"]);
}

#[test]
fn test_escaped_delimiters() {
  assert_eq!(plain_html(r"\*not italic\*"), "<p>*not italic*</p>");
  assert_eq!(plain_html(r"\[x](y)"), "<p>[x](y)</p>");
  assert_eq!(plain_html(r"a\\b"), r"<p>a\b</p>");
  assert_eq!(plain_html(r"\q"), r"<p>\q</p>");
}

#[test]
fn test_headings() {
  assert_eq!(plain_html("# One\n"), "<h1>One</h1>\n");
  assert_eq!(plain_html("## Two\n"), "<h2>Two</h2>\n");
  assert_eq!(plain_html("### Three\n"), "<h3>Three</h3>\n");
  assert_eq!(plain_html("#### Four\n"), "<h4>Four</h4>\n");
}

#[test]
fn test_heading_is_not_wrapped_in_paragraph() {
  assert_eq!(
    plain_html("# Title\n\nBody"),
    "<h1>Title</h1>\n\n<p>Body</p>"
  );
  assert_eq!(
    plain_html("text\n# H\n"),
    "<p>text</p>\n<h1>H</h1>\n"
  );
}

#[test]
fn test_consecutive_block_lines() {
  assert_eq!(plain_html("## A\n# B\n"), "<h2>A</h2>\n<h1>B</h1>\n");
  assert_eq!(
    plain_html("# A\n> q\n"),
    "<h1>A</h1>\n<blockquote>q</blockquote>\n"
  );
  assert_eq!(
    plain_html("`x` # y\n"),
    "<p><code>x</code> # y</p>\n"
  );
}

#[test]
fn test_heading_needs_line_start() {
  assert_eq!(plain_html("a # b\n"), "<p>a # b</p>\n");
  assert_eq!(plain_html("  # Indented\n"), "  <h1>Indented</h1>\n");
}

#[test]
fn test_blockquote_with_emphasis() {
  assert_eq!(
    plain_html("> **hi**\n"),
    "<blockquote><b>hi</b></blockquote>\n"
  );
}

#[test]
fn test_blank_lines_split_paragraphs() {
  assert_eq!(plain_html("one\n\ntwo"), "<p>one</p>\n\n<p>two</p>");
  assert_eq!(plain_html("one\ntwo"), "<p>one\ntwo</p>");
}

#[test]
fn test_inline_code() {
  assert_eq!(plain_html("use `x`"), "<p>use <code>x</code></p>");
}

#[test]
fn test_fenced_code() {
  assert_eq!(
    plain_html("```\nlet x = 1;\n```"),
    "<pre><code>let x = 1;</code></pre>"
  );
}

#[test]
fn test_inline_pair_across_blank_line_splits_paragraphs() {
  assert_eq!(
    plain_html("`a\n\nb`"),
    "<p><code>a</p>\n\n<p>b</code></p>"
  );
}

#[test]
fn test_fenced_code_spans_blank_lines() {
  assert_eq!(
    plain_html("```\none\n\ntwo\n```"),
    "<pre><code>one\n\ntwo</code></pre>"
  );
}

#[test]
fn test_fenced_code_closing_line_is_dropped() {
  assert_eq!(plain_html("```\na\nb```"), "<pre><code>a</code></pre>");
  assert_eq!(plain_html("```\nlet x```"), "<pre><code></code></pre>");
}

#[test]
fn test_fenced_code_between_paragraphs() {
  assert_eq!(
    plain_html("intro\n```\ncode\n```\noutro"),
    "<p>intro</p>\n<pre><code>code</code></pre>\n<p>outro</p>"
  );
}

#[test]
fn test_fenced_code_body_is_opaque_and_escaped() {
  assert_eq!(
    plain_html("```\n**x** <b>\n```"),
    "<pre><code>**x** &lt;b&gt;</code></pre>"
  );
}

#[test]
fn test_fenced_code_hint_selects_template() {
  let mut options = plain_options();
  options.shells.code_hints.insert(
    "rust".to_string(),
    r#"<pre class="rust">{{ body }}</pre>"#.to_string(),
  );
  let processor = MarkupProcessor::new(options).expect("shells compile");

  assert_eq!(
    processor.render("```rust\nfn main() {}\n```").expect("renders"),
    r#"<pre class="rust">fn main() {}</pre>"#
  );
  assert_eq!(
    processor.render("```python\npass\n```").expect("renders"),
    "<pre><code>pass</code></pre>"
  );
}

#[test]
fn test_link() {
  assert_eq!(
    plain_html("see [text](http://x)"),
    r#"<p>see <a href="http://x">text</a></p>"#
  );
}

#[test]
fn test_link_href_is_escaped() {
  assert_html_contains(&plain_html(r#"[x](a"b)"#), &[r#"href="a&quot;b""#]);
}

#[test]
fn test_link_text_is_not_reparsed() {
  assert_eq!(
    plain_html("[**a**](u)"),
    r#"<p><a href="u">**a**</a></p>"#
  );
}

#[test]
fn test_unicode_indices() {
  assert_eq!(plain_html("héllo *wörld*"), "<p>héllo <i>wörld</i></p>");
}

#[test]
fn test_empty_document() {
  assert_eq!(plain_html(""), "");
  assert_eq!(mono_markup::transform("").expect("renders"), "<div>\n\n</div>");
}
