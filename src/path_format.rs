//! Post path templates such as `blog/#y/#m/#s.md`.
//!
//! Recognised tokens are `#y` (year), `#m` (two digit month), `#d` (day,
//! unpadded) and `#s` (slug). Everything else is copied through as written.
//! Tokens cannot be escaped.

use crate::context::RunContext;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Turns a title (or a user supplied slug) into a path-safe slug.
///
/// `"Hello, World!"` becomes `"hello-world"`. Applying it to its own output
/// changes nothing.
pub fn slugify(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lower, "");
    WHITESPACE_RUN.replace_all(stripped.trim(), "-").into_owned()
}

/// The explicit slug when one is given, otherwise one derived from the title.
pub fn resolve_slug(title: &str, slug: Option<&str>) -> String {
    match slug {
        Some(slug) if !slug.is_empty() => slugify(slug),
        _ => slugify(title),
    }
}

/// Expands `template` using the run's date and the post slug.
pub fn resolve(template: &str, title: &str, slug: Option<&str>, ctx: &RunContext) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '#' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('y') => out.push_str(&ctx.year()),
            Some('m') => out.push_str(&ctx.month()),
            Some('d') => out.push_str(&ctx.day()),
            Some('s') => out.push_str(&resolve_slug(title, slug)),
            _ => {
                out.push(c);
                continue;
            }
        }
        chars.next();
    }

    out
}
