use crate::error::{NuevoError, Result};
use crate::localize::ensure_parent_dir;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

const DRAFT_PLACEHOLDER: &str = "draft: true";
const IMAGE_PLACEHOLDER: &str = "image: \"\"";

/// Fills the placeholders `hugo new` leaves in the stub's front matter.
///
/// The placeholder text is assumed, not verified: an archetype that spells
/// them differently is left as is.
pub fn apply_front_matter(stub: &str, publish: bool, header_image: Option<&str>) -> String {
    let mut data = stub.to_string();
    if publish {
        data = data.replacen(DRAFT_PLACEHOLDER, "draft: false", 1);
    }
    if let Some(image) = header_image {
        data = data.replacen(IMAGE_PLACEHOLDER, &format!("image: \"{image}\""), 1);
    }
    data
}

/// Applies front matter changes to the stub at `path`, then appends `body`.
///
/// A missing or empty stub skips the front matter step; the body is still
/// appended, creating the file and its directories if needed.
pub fn finalize_stub(
    path: &Path,
    body: &str,
    publish: bool,
    header_image: Option<&str>,
) -> Result<()> {
    if publish || header_image.is_some() {
        match fs::read_to_string(path) {
            Ok(data) if !data.is_empty() => {
                let data = apply_front_matter(&data, publish, header_image);
                fs::write(path, format!("{}\n", data.trim())).map_err(|source| {
                    NuevoError::FileWrite {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
            }
            Ok(_) => debug!("Stub {} is empty, front matter left alone", path.display()),
            Err(e) => debug!("Stub {} unreadable ({e}), front matter left alone", path.display()),
        }
    }

    append_body(path, body)
}

fn append_body(path: &Path, body: &str) -> Result<()> {
    if body.is_empty() {
        return Ok(());
    }
    let write_err = |source| NuevoError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_dir(path)?;
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(write_err)?;
    writeln!(file, "{body}").map_err(write_err)?;
    Ok(())
}
