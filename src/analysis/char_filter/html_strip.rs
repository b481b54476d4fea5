//! HTML stripping char filter.
//!
//! Keeps the text content of a document: comments, `<script>` and `<style>`
//! blocks and all tags are removed, and character references are decoded.
//! Tags are removed without inserting whitespace, so `<p>a</p><p>b</p>`
//! becomes `ab`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::CharFilter;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern should be valid"));

static RAW_TEXT_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("script/style pattern should be valid")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[A-Za-z!?][^>]*>").expect("tag pattern should be valid")
});

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]*);")
        .expect("entity pattern should be valid")
});

/// A char filter that strips HTML markup.
#[derive(Clone, Debug, Default)]
pub struct HtmlStripCharFilter;

impl HtmlStripCharFilter {
    pub fn new() -> Self {
        HtmlStripCharFilter
    }
}

fn decode_entity(caps: &Captures<'_>) -> String {
    let body = &caps[1];

    let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        match body {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ => None,
        }
    };

    match decoded {
        Some(c) => c.to_string(),
        None => caps[0].to_string(),
    }
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &str) -> String {
        let text = COMMENT.replace_all(input, "");
        let text = RAW_TEXT_ELEMENT.replace_all(&text, "");
        let text = TAG.replace_all(&text, "");
        ENTITY.replace_all(&text, decode_entity).into_owned()
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}
