//! Restricted formatting for cue text.
//!
//! Subtitle text is untrusted. Only `<i>`, `<b>`, `<u>` and line breaks
//! survive; every other tag is dropped (keeping its text), attributes are
//! discarded, and `<script>`/`<style>` bodies are removed entirely.
//! Newlines in the raw text become breaks before anything else happens.
//!
//! The token stream feeds two renderers: [`to_html`] for an HTML fragment
//! and [`to_lines`] for the terminal player.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Formatting tags that survive sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Italic,
    Bold,
    Underline,
}

impl Tag {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "i" | "em" => Some(Tag::Italic),
            "b" | "strong" => Some(Tag::Bold),
            "u" => Some(Tag::Underline),
            _ => None,
        }
    }

    fn html_name(self) -> &'static str {
        match self {
            Tag::Italic => "i",
            Tag::Bold => "b",
            Tag::Underline => "u",
        }
    }

    fn modifier(self) -> Modifier {
        match self {
            Tag::Italic => Modifier::ITALIC,
            Tag::Bold => Modifier::BOLD,
            Tag::Underline => Modifier::UNDERLINED,
        }
    }
}

/// Sanitized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain text with entities decoded
    Text(String),
    Open(Tag),
    Close(Tag),
    Break,
}

/// Tags whose content is dropped along with the tag.
const DROP_CONTENT: &[&str] = &["script", "style"];

/// Tokenize raw cue text into the allowed subset.
///
/// Open and close tags are balanced: stray closers are dropped and any tag
/// still open at the end is closed.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let source = raw.replace("\r\n", "\n").replace('\n', "<br />");
    let mut tokens = Vec::new();
    let mut open: Vec<Tag> = Vec::new();
    let mut text = String::new();
    let mut rest = source.as_str();

    while let Some(lt) = rest.find('<') {
        text.push_str(&rest[..lt]);
        let after = &rest[lt..];

        let Some(parsed) = parse_tag(after) else {
            // Not a tag, keep the `<` literally
            text.push('<');
            rest = &after[1..];
            continue;
        };
        rest = &after[parsed.len..];

        if DROP_CONTENT.contains(&parsed.name.as_str()) {
            if !parsed.closing && !parsed.self_closing {
                rest = skip_past_closing(rest, &parsed.name);
            }
            continue;
        }

        if parsed.name == "br" {
            flush_text(&mut text, &mut tokens);
            tokens.push(Token::Break);
            continue;
        }

        let Some(tag) = Tag::from_name(&parsed.name) else {
            continue;
        };
        if parsed.self_closing {
            continue;
        }

        flush_text(&mut text, &mut tokens);
        if parsed.closing {
            if let Some(pos) = open.iter().rposition(|t| *t == tag) {
                for inner in open.drain(pos..).rev() {
                    tokens.push(Token::Close(inner));
                }
            }
        } else {
            open.push(tag);
            tokens.push(Token::Open(tag));
        }
    }

    text.push_str(rest);
    flush_text(&mut text, &mut tokens);
    for tag in open.into_iter().rev() {
        tokens.push(Token::Close(tag));
    }
    tokens
}

/// Render cue text as a sanitized HTML fragment.
///
/// # Examples
///
/// ```
/// use subprompt::subtitle::markup::to_html;
///
/// assert_eq!(to_html("<b>Hi</b>\nthere"), "<b>Hi</b><br />there");
/// assert_eq!(to_html("<img src=x onerror=alert(1)>ok"), "ok");
/// ```
pub fn to_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for token in tokenize(raw) {
        match token {
            Token::Text(t) => escape_html(&t, &mut out),
            Token::Open(tag) => {
                out.push('<');
                out.push_str(tag.html_name());
                out.push('>');
            }
            Token::Close(tag) => {
                out.push_str("</");
                out.push_str(tag.html_name());
                out.push('>');
            }
            Token::Break => out.push_str("<br />"),
        }
    }
    out
}

/// Render cue text as styled terminal lines on top of `base`.
pub fn to_lines(raw: &str, base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut active: Vec<Tag> = Vec::new();

    for token in tokenize(raw) {
        match token {
            Token::Text(t) => {
                let style = active
                    .iter()
                    .fold(base, |style, tag| style.add_modifier(tag.modifier()));
                spans.push(Span::styled(t, style));
            }
            Token::Open(tag) => active.push(tag),
            Token::Close(tag) => {
                if let Some(pos) = active.iter().rposition(|t| *t == tag) {
                    active.remove(pos);
                }
            }
            Token::Break => lines.push(Line::from(std::mem::take(&mut spans))),
        }
    }
    lines.push(Line::from(spans));
    lines
}

/// Plain text with all formatting removed (breaks become `\n`).
pub fn to_plain(raw: &str) -> String {
    let mut out = String::new();
    for token in tokenize(raw) {
        match token {
            Token::Text(t) => out.push_str(&t),
            Token::Break => out.push('\n'),
            Token::Open(_) | Token::Close(_) => {}
        }
    }
    out
}

struct ParsedTag {
    name: String,
    closing: bool,
    self_closing: bool,
    /// Byte length of the tag including `<` and `>`
    len: usize,
}

/// Parse a tag at the start of `s` (which begins with `<`).
fn parse_tag(s: &str) -> Option<ParsedTag> {
    let end = s.find('>')?;
    let inner = &s[1..end];
    let (closing, body) = match inner.strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, inner),
    };

    let name: String = body
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    if name.is_empty() || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    // `<b2>` style garbage after the name must be whitespace, `/` or end
    let after_name = &body[name.len()..];
    if !(after_name.is_empty() || after_name.starts_with([' ', '\t', '/'])) {
        return None;
    }

    Some(ParsedTag {
        name,
        closing,
        self_closing: inner.trim_end().ends_with('/'),
        len: end + 1,
    })
}

/// Skip everything up to and including `</name>`; drops the rest if unclosed.
fn skip_past_closing<'a>(s: &'a str, name: &str) -> &'a str {
    let lower = s.to_ascii_lowercase();
    let needle = format!("</{}", name);
    match lower.find(&needle) {
        Some(pos) => match s[pos..].find('>') {
            Some(gt) => &s[pos + gt + 1..],
            None => "",
        },
        None => "",
    }
}

fn flush_text(text: &mut String, tokens: &mut Vec<Token>) {
    if !text.is_empty() {
        tokens.push(Token::Text(decode_entities(text)));
        text.clear();
    }
}

fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

fn escape_html(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
