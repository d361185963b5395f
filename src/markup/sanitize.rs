//! Strip executable content from user-edited markup.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b[^>]*>.*?(?:</script\s*>|$)").expect("script pattern")
    })
}

fn iframe_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<iframe\b[^>]*>.*?(?:</iframe\s*>|$)").expect("iframe pattern")
    })
}

fn open_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<[a-zA-Z][a-zA-Z0-9-]*(?:[^>"']|"[^"]*"|'[^']*')*>"#)
            .expect("open tag pattern")
    })
}

fn handler_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#)
            .expect("handler pattern")
    })
}

/// Remove `<script>` and `<iframe>` elements (with their content) and
/// inline `on*=` event handler attributes. Styling and text are left alone.
pub fn sanitize(markup: &str) -> String {
    let cleaned = script_re().replace_all(markup, "");
    let cleaned = iframe_re().replace_all(&cleaned, "");
    open_tag_re()
        .replace_all(&cleaned, |caps: &Captures<'_>| {
            handler_re().replace_all(&caps[0], "").into_owned()
        })
        .into_owned()
}
