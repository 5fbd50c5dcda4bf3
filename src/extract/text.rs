//! HTML to plain text.
//!
//! Approximates what a browser's `innerText` gives for `<body>`: non-content
//! elements are skipped with their whole subtree, whitespace inside text runs
//! collapses to single spaces (except inside `<pre>`), block-level elements
//! start new lines, and table cells are tab-separated on their row's line.
//! [`flatten_text`] then drops blank lines and trims the rest.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

use crate::config::{BLOCK_LEVEL_TAGS, NON_CONTENT_TAGS, PREFORMATTED_TAGS, TABLE_CELL_TAGS};
use crate::utils::compile_selector;

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_selector("body", "text extraction root"));

/// Returns true for elements whose content is never part of the readable text.
pub fn is_non_content(tag: &str) -> bool {
    NON_CONTENT_TAGS.contains(&tag)
}

/// Extracts the visible text of an HTML document.
///
/// The parsed document never leaves this function (`scraper::Html` is not
/// `Send`, so it must not live across an await point in a handler).
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut out = String::new();
    collect_text(root, false, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, preformatted: bool, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) if preformatted => out.push_str(text),
            Node::Text(text) => push_collapsed(text, out),
            Node::Element(el) => {
                let name = el.name();
                if is_non_content(name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                let preformatted = preformatted || PREFORMATTED_TAGS.contains(&name);
                if TABLE_CELL_TAGS.contains(&name) {
                    start_cell(out);
                    collect_text(child_element, preformatted, out);
                    continue;
                }
                let block = BLOCK_LEVEL_TAGS.contains(&name);
                if block {
                    out.push('\n');
                }
                collect_text(child_element, preformatted, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Separates a table cell from the previous one on the same row.
fn start_cell(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\t');
    }
}

/// Appends a text node with internal whitespace runs collapsed to one space.
fn push_collapsed(text: &str, out: &mut String) {
    let ends_in_space = |s: &String| s.is_empty() || s.ends_with(char::is_whitespace);

    if text.starts_with(char::is_whitespace) && !ends_in_space(out) {
        out.push(' ');
    }

    let mut words = text.split_whitespace();
    if let Some(first) = words.next() {
        out.push_str(first);
        for word in words {
            out.push(' ');
            out.push_str(word);
        }
        if text.ends_with(char::is_whitespace) {
            out.push(' ');
        }
    }
}

/// Splits text into lines, drops blank ones, trims the rest and rejoins with `\n`.
pub fn flatten_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_text_drops_blank_lines_and_trims() {
        let raw = "  Hello  \n\n   \n\tWorld\t\n\n";
        assert_eq!(flatten_text(raw), "Hello\nWorld");
    }

    #[test]
    fn test_flatten_text_empty() {
        assert_eq!(flatten_text(""), "");
        assert_eq!(flatten_text(" \n \r\n "), "");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("one two\nthree\tfour"), 4);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_non_content_elements_are_removed() {
        let html = r#"<html><head><style>body { color: red; }</style></head><body>
            <nav><a href="/">Home</a><a href="/about">About</a></nav>
            <p>First paragraph</p>
            <script>var hidden = "script text";</script>
            <p>Second paragraph</p>
            <style>.x { display: none }</style>
            <footer>Copyright</footer>
        </body></html>"#;
        let text = flatten_text(&visible_text(html));
        assert_eq!(text, "First paragraph\nSecond paragraph");
        assert!(!text.contains("Home"));
        assert!(!text.contains("script text"));
        assert!(!text.contains("color"));
        assert!(!text.lines().any(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_every_listed_tag_is_skipped() {
        // <img> is a void element and cannot wrap text; covered below
        for tag in NON_CONTENT_TAGS.iter().filter(|t| **t != "img") {
            let html = format!("<body><p>keep</p><{tag}>drop me</{tag}></body>");
            let text = flatten_text(&visible_text(&html));
            assert_eq!(text, "keep", "content of <{tag}> leaked");
        }
    }

    #[test]
    fn test_img_alt_text_is_not_content() {
        let html = r#"<body><p>keep<img src="x.png" alt="alt text"></p></body>"#;
        assert_eq!(flatten_text(&visible_text(html)), "keep");
    }

    #[test]
    fn test_inline_elements_stay_on_one_line() {
        let html = "<body><p>Hello <b>bold</b> and <a href='#'>linked</a> world</p></body>";
        assert_eq!(flatten_text(&visible_text(html)), "Hello bold and linked world");
    }

    #[test]
    fn test_source_whitespace_collapses() {
        let html = "<body><p>\n   Spread\n   across    lines\n</p></body>";
        assert_eq!(flatten_text(&visible_text(html)), "Spread across lines");
    }

    #[test]
    fn test_block_elements_and_br_break_lines() {
        let html = "<body><div>one</div><div>two<br>three</div><ul><li>a</li><li>b</li></ul></body>";
        assert_eq!(flatten_text(&visible_text(html)), "one\ntwo\nthree\na\nb");
    }

    #[test]
    fn test_head_title_is_not_body_text() {
        let html = "<html><head><title>Tab title</title></head><body><p>Body</p></body></html>";
        assert_eq!(flatten_text(&visible_text(html)), "Body");
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = "<body><p>Fish &amp; Chips &lt;3</p></body>";
        assert_eq!(flatten_text(&visible_text(html)), "Fish & Chips <3");
    }

    #[test]
    fn test_word_count_matches_content_tokens() {
        let html = "<body><h1>Title here</h1><p>Some body   text</p><nav>skip this</nav></body>";
        let content = flatten_text(&visible_text(html));
        assert_eq!(count_words(&content), content.split_whitespace().count());
        assert_eq!(count_words(&content), 5);
    }

    #[test]
    fn test_preformatted_text_keeps_whitespace() {
        let html = "<body><p>before</p><pre>a    b\n  c</pre></body>";
        assert!(visible_text(html).contains("a    b\n  c"));
        // line trimming still applies afterwards
        assert_eq!(flatten_text(&visible_text(html)), "before\na    b\nc");
    }

    #[test]
    fn test_table_rows_are_tab_separated() {
        let html = r#"<body><table>
            <tr><th>Name</th> <th>Score</th></tr>
            <tr>
              <td> Alice </td>
              <td><b>99</b></td>
            </tr>
        </table></body>"#;
        assert_eq!(flatten_text(&visible_text(html)), "Name\tScore\nAlice\t99");
        assert_eq!(count_words(&flatten_text(&visible_text(html))), 4);
    }
}
