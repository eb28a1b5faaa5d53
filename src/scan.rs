//! Finds markdown image references in a post body.
//!
//! The body is tokenized with pulldown-cmark so images inside code spans and
//! fenced blocks are not mistaken for real ones. Only inline images whose
//! target is made of `[0-9A-Za-z-:_./]` are reported; anything else (spaces,
//! query strings, titles, angle brackets) is skipped without error. An image
//! nested in another image's alt text belongs to its parent and is not
//! reported on its own.

use crate::model::{ImageKind, ImageRef};
use pulldown_cmark::{Event, LinkType, Options, Parser, Tag, TagEnd};

/// Size of the leading window searched for a header image.
pub const HEADER_WINDOW: usize = 750;

/// All top-level image references in `body`, in order of appearance.
///
/// The returned spans never overlap.
pub fn scan_images(body: &str) -> Vec<ImageRef> {
    let mut images = Vec::new();
    let mut depth = 0usize;

    for (event, range) in Parser::new_ext(body, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(Tag::Image { link_type, .. }) => {
                if depth == 0 && link_type == LinkType::Inline {
                    images.extend(parse_inline_image(body, range.start, range.end));
                }
                depth += 1;
            }
            Event::End(TagEnd::Image) => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    images
}

/// The first image lying wholly within the first [`HEADER_WINDOW`] bytes of `body`.
pub fn first_image_in_window(body: &str) -> Option<ImageRef> {
    let mut end = body.len().min(HEADER_WINDOW);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    scan_images(&body[..end]).into_iter().next()
}

fn parse_inline_image(body: &str, start: usize, end: usize) -> Option<ImageRef> {
    let text = body.get(start..end)?;
    if !text.starts_with("![") || !text.ends_with(')') {
        return None;
    }
    let split = text.rfind("](")?;
    let target = &text[split + 2..text.len() - 1];
    if !is_conservative_target(target) {
        return None;
    }

    let target_start = start + split + 2;
    Some(ImageRef {
        span: start..end,
        target_span: target_start..target_start + target.len(),
        alt: text[2..split].to_string(),
        target: target.to_string(),
        kind: ImageKind::classify(target),
    })
}

fn is_conservative_target(target: &str) -> bool {
    !target.is_empty()
        && target
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '_' | '.' | '/'))
}
