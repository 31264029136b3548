//! Rich-text sanitization for HTML coming back from the service.
//!
//! Allow-list based: everything not explicitly permitted is stripped,
//! including `script`/`object`/`embed`/`form`/`input`/`button`/`iframe`
//! and every event-handler attribute.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;
use once_cell::sync::Lazy;

// built once
static CLEANER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut cleaner = Builder::default();

    cleaner.tags(HashSet::from([
        // structure
        "p", "div", "span", "br", "hr",
        // inline formatting
        "strong", "em", "b", "i", "u", "s", "sub", "sup",
        // lists
        "ul", "ol", "li",
        // headings
        "h1", "h2", "h3", "h4", "h5", "h6",
        // quotes and code
        "blockquote", "code", "pre",
        // links
        "a",
    ]));

    cleaner.generic_attributes(HashSet::new());
    cleaner.tag_attributes(HashMap::from([("a", HashSet::from(["href", "title"]))]));

    let mut schemes = HashSet::new();
    schemes.insert("http");
    schemes.insert("https");
    schemes.insert("mailto");
    cleaner.url_schemes(schemes);
    cleaner.link_rel(Some("noopener noreferrer"));

    cleaner
});

/// Normalize untrusted rich-text HTML into the allow-listed subset.
///
/// Blank input yields an empty string. Pure with respect to external
/// state: no network, no storage.
pub fn sanitize_html(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    CLEANER.clean(input).to_string()
}

/// Entity-encode plain text for contexts where no markup is wanted.
pub fn escape_html(input: &str) -> String {
    ammonia::clean_text(input)
}
