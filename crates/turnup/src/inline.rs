//! Inline span tokenization.
//!
//! Converts a raw text line into an ordered sequence of typed spans by
//! recognizing delimiter pairs (`**`, `*`, `` ` ``) and link/image syntax,
//! then maps each span to a leaf node of the output tree.

use once_cell::sync::Lazy;
use regex::Regex;

use turnup_core::HtmlNode;

use crate::{Result, TurnupError};

/// `![alt](url)`
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("image pattern"));

/// `[text](url)`; matches preceded by `!` are rejected by the caller.
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("link pattern"));

/// A contiguous run of text tagged with one inline style.
///
/// Spans are produced transiently by [`tokenize`] and consumed immediately
/// by [`Span::to_node`]; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Unstyled text
    Plain(String),

    /// `**bold**`
    Bold(String),

    /// `*italic*`
    Italic(String),

    /// `` `code` ``
    Code(String),

    /// `[text](url)`
    Link { text: String, url: String },

    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl Span {
    /// Convert this span to a leaf node of the HTML tree.
    pub fn to_node(&self) -> HtmlNode {
        match self {
            Span::Plain(text) => HtmlNode::text(text.clone()),
            Span::Bold(text) => HtmlNode::leaf("b", text.clone()),
            Span::Italic(text) => HtmlNode::leaf("i", text.clone()),
            Span::Code(text) => HtmlNode::leaf("code", text.clone()),
            Span::Link { text, url } => {
                HtmlNode::leaf_with_attrs("a", text.clone(), vec![("href", url.as_str())])
            }
            Span::Image { alt, url } => HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src", url.as_str()), ("alt", alt.as_str())],
            ),
        }
    }
}

/// Tokenize one line of text into inline spans.
///
/// The stages run as a fixed pipeline; each stage only re-examines spans
/// still tagged [`Span::Plain`]. `**` is scanned before `*` so a bold
/// delimiter is never consumed as two italic delimiters.
///
/// Fails with [`TurnupError::MalformedMarkdown`] when a style delimiter
/// appears an odd number of times.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::Plain(text.to_string())];
    let spans = split_delimiter(spans, "**", Span::Bold)?;
    let spans = split_delimiter(spans, "*", Span::Italic)?;
    let spans = split_delimiter(spans, "`", Span::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split every plain span on a style delimiter.
///
/// Occurrences are found left to right, non-overlapping, the delimiter
/// matched as a unit. They must come in pairs; the text inside a pair
/// becomes a styled span with the delimiters stripped, text outside pairs
/// stays plain. Zero-length plain segments are dropped.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    style: fn(String) -> Span,
) -> Result<Vec<Span>> {
    let step = delimiter.len();
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            result.push(span);
            continue;
        };

        let positions: Vec<usize> = text.match_indices(delimiter).map(|(i, _)| i).collect();

        if positions.is_empty() {
            result.push(Span::Plain(text));
            continue;
        }
        if positions.len() % 2 != 0 {
            return Err(TurnupError::MalformedMarkdown(format!(
                "unbalanced `{delimiter}` delimiter in {text:?}"
            )));
        }

        push_plain(&mut result, &text[..positions[0]]);
        for (i, pair) in positions.chunks_exact(2).enumerate() {
            result.push(style(text[pair[0] + step..pair[1]].to_string()));

            // Plain text up to the next opening delimiter, or the end.
            let gap_end = positions.get(i * 2 + 2).copied().unwrap_or(text.len());
            push_plain(&mut result, &text[pair[1] + step..gap_end]);
        }
    }

    Ok(result)
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        spans.push(Span::Plain(text.to_string()));
    }
}

/// Extract `![alt](url)` patterns from plain spans.
fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &IMAGE, false, |alt, url| Span::Image {
        alt: alt.to_string(),
        url: url.to_string(),
    })
}

/// Extract `[text](url)` patterns from plain spans, skipping image syntax.
fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &LINK, true, |text, url| Span::Link {
        text: text.to_string(),
        url: url.to_string(),
    })
}

fn split_pattern(
    spans: Vec<Span>,
    pattern: &Regex,
    skip_bang_prefixed: bool,
    make: impl Fn(&str, &str) -> Span,
) -> Vec<Span> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            result.push(span);
            continue;
        };

        let mut cursor = 0;
        let mut matched = false;

        for caps in pattern.captures_iter(&text) {
            let (Some(whole), Some(first), Some(second)) =
                (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            // The regex crate has no lookbehind; reject `![..](..)` here.
            if skip_bang_prefixed
                && whole.start() > 0
                && text.as_bytes()[whole.start() - 1] == b'!'
            {
                continue;
            }

            push_plain(&mut result, &text[cursor..whole.start()]);
            result.push(make(first.as_str(), second.as_str()));
            cursor = whole.end();
            matched = true;
        }

        if !matched {
            result.push(Span::Plain(text));
        } else {
            push_plain(&mut result, &text[cursor..]);
        }
    }

    result
}
