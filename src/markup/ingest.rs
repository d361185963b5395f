//! Markup back into a document.

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use super::{sanitize, unescape};
use crate::ansi::{decode, VisualStyle};
use crate::document::{Document, ScopeNode, StyleScope};
use crate::style::StyleCode;

const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "meta", "wbr"];

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)((?:[^>\x22']|\x22[^\x22]*\x22|'[^']*')*)>")
            .expect("tag pattern")
    })
}

fn comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern"))
}

fn attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\b(style|class)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("attribute pattern")
    })
}

/// Parse editor markup into a document.
///
/// The markup is sanitized first. Each element becomes a nested style
/// scope whose codes come from decoding its inline `style` attribute (and
/// any `ansi-<code>` class); elements without recognizable styling are
/// transparent. `<br>` and newlines in text become line breaks. Closing
/// tags that match no open element are ignored; elements left open at the
/// end are closed.
pub fn ingest(markup: &str) -> Document {
    let sanitized = sanitize(markup);
    let clean = comment_re().replace_all(&sanitized, "");
    let clean: &str = &clean;

    // Open elements, innermost last; the root has no tag name.
    let mut stack: Vec<(Option<String>, StyleScope)> = vec![(None, StyleScope::root())];
    let mut last = 0;

    for caps in tag_re().captures_iter(&clean) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        push_text(&mut stack, &clean[last..whole.start()]);
        last = whole.end();

        let name = name.as_str().to_ascii_lowercase();
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let attributes = caps.get(3).map_or("", |m| m.as_str());

        if closing {
            close_element(&mut stack, &name);
        } else if name == "br" {
            top(&mut stack).push(ScopeNode::LineBreak);
        } else if VOID_TAGS.contains(&name.as_str()) || attributes.trim_end().ends_with('/') {
            trace!(tag = %name, "Skipping void element");
        } else {
            let codes = element_codes(attributes);
            trace!(tag = %name, codes = ?codes, "Opening element");
            stack.push((Some(name), StyleScope::with_codes(codes)));
        }
    }
    push_text(&mut stack, &clean[last..]);

    while stack.len() > 1 {
        pop_into_parent(&mut stack);
    }
    let root = stack.pop().map(|(_, scope)| scope).unwrap_or_default();
    let document = root.flatten();
    debug!(segments = document.segments().len(), "Ingested markup");
    document
}

fn top(stack: &mut [(Option<String>, StyleScope)]) -> &mut StyleScope {
    // the root entry is never popped before the end of `ingest`
    let last = stack.len() - 1;
    &mut stack[last].1
}

fn push_text(stack: &mut [(Option<String>, StyleScope)], raw: &str) {
    if raw.is_empty() {
        return;
    }
    // Text is pre-wrapped: a newline is a line break just like <br>
    let text = unescape(&raw.replace('\r', ""));
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            top(stack).push(ScopeNode::LineBreak);
        }
        if !line.is_empty() {
            top(stack).push(ScopeNode::Text(line.to_string()));
        }
    }
}

fn pop_into_parent(stack: &mut Vec<(Option<String>, StyleScope)>) {
    if stack.len() < 2 {
        return;
    }
    if let Some((_, scope)) = stack.pop() {
        top(stack).push(ScopeNode::Scope(scope));
    }
}

fn close_element(stack: &mut Vec<(Option<String>, StyleScope)>, name: &str) {
    let Some(depth) = stack
        .iter()
        .rposition(|(tag, _)| tag.as_deref() == Some(name))
    else {
        trace!(tag = %name, "Ignoring unmatched closing tag");
        return;
    };
    while stack.len() > depth {
        pop_into_parent(stack);
    }
}

/// Style codes carried by an element's attributes.
fn element_codes(attributes: &str) -> Vec<StyleCode> {
    let mut codes = Vec::new();
    for caps in attr_re().captures_iter(attributes) {
        let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
        let value = unescape(value);
        match caps.get(1).map(|m| m.as_str().to_ascii_lowercase()).as_deref() {
            Some("style") => codes.extend(decode(&VisualStyle::parse_css(&value))),
            Some("class") => codes.extend(
                value
                    .split_whitespace()
                    .filter_map(|class| class.strip_prefix("ansi-"))
                    .filter_map(|n| n.parse::<u8>().ok())
                    .filter_map(|n| StyleCode::try_from(n).ok()),
            ),
            _ => {}
        }
    }
    codes
}
