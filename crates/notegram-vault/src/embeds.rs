//! Embed metadata parser.
//!
//! Finds attachment embeds in note text, in document order:
//! - wiki embeds: `![[pic.png]]`, `![[pic.png|300]]`, `![[Note#Heading]]`
//! - Markdown embeds: `![alt](pic.png)`, `![alt](<my pic.png> "title")`
//!
//! External targets (`https://...`) are not attachments and are skipped, as
//! is anything inside a fenced code block.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use notegram_core::types::Embed;

static EMBED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"!\[\[(?P<wiki>[^\[\]\n]+?)\]\]|!\[(?P<alt>[^\]\n]*)\]\((?P<dest><[^>\n]+>|[^)\s]+)(?:\s+"[^"\n]*")?\)"#,
    )
    .unwrap()
});

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?ms)^```.*?^```").unwrap());

/// Parse every attachment embed in `text`.
pub fn parse_embeds(text: &str) -> Vec<Embed> {
    let fences: Vec<Range<usize>> = FENCE_RE.find_iter(text).map(|m| m.range()).collect();

    EMBED_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if fences.iter().any(|r| r.contains(&whole.start())) {
                return None;
            }

            let link = if let Some(wiki) = caps.name("wiki") {
                wiki_link(wiki.as_str())
            } else {
                markdown_link(caps.name("dest")?.as_str())
            };

            if link.is_empty() || link.contains("://") {
                return None;
            }
            Some(Embed::new(link, whole.as_str()))
        })
        .collect()
}

/// `target|alias` / `target#subpath` → `target`.
fn wiki_link(inner: &str) -> String {
    let target = inner.split('|').next().unwrap_or_default();
    let target = target.split('#').next().unwrap_or_default();
    target.trim().to_string()
}

/// `<a b.png>` → `a b.png`, `caf%C3%A9.png` → `café.png`.
///
/// Escapes that don't decode to UTF-8 leave the destination as written.
fn markdown_link(dest: &str) -> String {
    let dest = dest
        .strip_prefix('<')
        .and_then(|d| d.strip_suffix('>'))
        .unwrap_or(dest)
        .trim();
    match urlencoding::decode(dest) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => dest.to_string(),
    }
}
