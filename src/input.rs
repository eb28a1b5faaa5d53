use crate::config::BodySource;
use crate::error::{NuevoError, Result};
use std::io::{self, Read};
use std::path::Path;

/// Reads and trims the post body. Relative paths resolve against `root`.
///
/// A file or stdin that turns out empty is an error; no source gives an empty body.
pub fn read_body(source: &BodySource, root: &Path) -> Result<String> {
    let raw = match source {
        BodySource::None => return Ok(String::new()),
        BodySource::File(path) => {
            let path = root.join(path);
            std::fs::read_to_string(&path).map_err(|source| NuevoError::InputRead { path, source })?
        }
        BodySource::Stdin => read_from(io::stdin().lock())?,
    };

    let body = raw.trim();
    if body.is_empty() {
        return Err(NuevoError::EmptyBody);
    }
    Ok(body.to_string())
}

fn read_from(mut reader: impl Read) -> Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|source| NuevoError::InputRead {
            path: "<stdin>".into(),
            source,
        })?;
    Ok(buf)
}
