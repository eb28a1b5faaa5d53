//! Best-effort extraction of a header image and a title line from a post body.

use crate::scan::{first_image_in_window, HEADER_WINDOW};
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)- # ([\w \t’'.,;]+)$").unwrap());

/// Removes the first image near the top of `body` and returns its target.
///
/// Bodies no longer than the leading window keep their images inline. Otherwise
/// only an image lying wholly within the window counts; without one the body
/// comes back unchanged with no header image.
pub fn extract_header_image(body: &str) -> (String, Option<String>) {
    if body.len() <= HEADER_WINDOW {
        return (body.to_string(), None);
    }
    match first_image_in_window(body) {
        Some(image) => {
            let mut rest = String::with_capacity(body.len());
            rest.push_str(&body[..image.span.start]);
            rest.push_str(&body[image.span.end..]);
            (rest, Some(image.target))
        }
        None => (body.to_string(), None),
    }
}

/// Finds a `- # Title` line, removes it (with its newline) and returns the title.
pub fn extract_title(body: &str) -> (String, Option<String>) {
    let Some(caps) = TITLE_LINE.captures(body) else {
        return (body.to_string(), None);
    };
    let (Some(line), Some(title)) = (caps.get(0), caps.get(1)) else {
        return (body.to_string(), None);
    };
    let title = title.as_str().trim();
    if title.is_empty() {
        return (body.to_string(), None);
    }

    let mut end = line.end();
    if body[end..].starts_with("\r\n") {
        end += 2;
    } else if body[end..].starts_with('\n') {
        end += 1;
    }
    let mut rest = String::with_capacity(body.len());
    rest.push_str(&body[..line.start()]);
    rest.push_str(&body[end..]);
    (rest, Some(title.to_string()))
}
