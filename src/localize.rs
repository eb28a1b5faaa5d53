//! Moves remote and absolute-path images into the site's asset tree and
//! points the post body at the new copies.

use crate::error::{NuevoError, Result};
use crate::model::{ImageKind, ImageRef};
use crate::scan::scan_images;
use log::{debug, info};
use reqwest::blocking::{Client, ClientBuilder};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fetches a remote resource into a local file.
pub trait Download {
    /// Writes the body of `url` to `dest`. The parent directory already exists.
    ///
    /// Implementations must not create `dest` when the request itself fails.
    fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Blocking HTTP(S) downloader. Redirects are followed by the client; no
/// timeout is set, so a stalled server stalls the run.
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        Self::from_builder(Client::builder())
    }

    fn from_builder(builder: ClientBuilder) -> Result<Self> {
        let client = builder
            .user_agent(concat!("hugo-nuevo/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| NuevoError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Download for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let fail = |e: reqwest::Error| NuevoError::Download {
            url: url.to_string(),
            source: e.into(),
        };

        let mut resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(fail)?;

        let mut file = File::create(dest).map_err(|source| NuevoError::FileWrite {
            path: dest.to_path_buf(),
            source,
        })?;
        resp.copy_to(&mut file).map_err(fail)?;
        Ok(())
    }
}

/// One image moved into the asset tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedAsset {
    pub source: String,
    pub kind: ImageKind,
    /// Absolute location written on disk.
    pub dest: PathBuf,
    /// Text now used as the image target in the body.
    pub link: String,
}

/// Result of localizing a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized {
    pub body: String,
    /// Number of image references found, localized or not.
    pub found: usize,
    pub assets: Vec<LocalizedAsset>,
}

pub struct Localizer<'a, D: Download> {
    downloader: &'a D,
    root: &'a Path,
    strip_prefix: &'a str,
}

impl<'a, D: Download> Localizer<'a, D> {
    /// `root` is the site directory that relative asset paths are written under.
    pub fn new(downloader: &'a D, root: &'a Path, strip_prefix: &'a str) -> Self {
        Self {
            downloader,
            root,
            strip_prefix,
        }
    }

    /// Localizes every remote and absolute image of `body` into `dest_dir`
    /// (relative to the root), naming files `001.png`, `002.jpg`, ... in order
    /// of first appearance.
    ///
    /// Indices count distinct targets: a target seen before reuses its file and
    /// does not consume a number, so `a, a, c` names `c` `002`.
    ///
    /// The first failure aborts the call. Files written before it are left in place.
    pub fn localize(&self, body: &str, dest_dir: &str) -> Result<Localized> {
        let images = scan_images(body);
        if images.is_empty() {
            info!("No images found in post body");
            return Ok(Localized {
                body: body.to_string(),
                found: 0,
                assets: Vec::new(),
            });
        }
        info!("Found {} image reference(s)", images.len());

        let dest_dir = dest_dir.trim_end_matches('/');
        let mut assigned: HashMap<&str, Option<String>> = HashMap::new();
        let mut assets = Vec::new();
        let mut rewrites: Vec<(&ImageRef, String)> = Vec::new();

        for image in &images {
            if !assigned.contains_key(image.target.as_str()) {
                let index = assigned.len() + 1;
                let link = if image.kind.is_localized() {
                    let relative = format!("{}/{:03}{}", dest_dir, index, image.extension());
                    let dest = self.root.join(&relative);
                    self.fetch(image, &dest)?;
                    let link = relative.replacen(self.strip_prefix, "", 1);
                    assets.push(LocalizedAsset {
                        source: image.target.clone(),
                        kind: image.kind,
                        dest,
                        link: link.clone(),
                    });
                    Some(link)
                } else {
                    None
                };
                assigned.insert(image.target.as_str(), link);
            }

            if let Some(Some(link)) = assigned.get(image.target.as_str()) {
                rewrites.push((image, link.clone()));
            }
        }

        Ok(Localized {
            body: splice_targets(body, &rewrites),
            found: images.len(),
            assets,
        })
    }

    fn fetch(&self, image: &ImageRef, dest: &Path) -> Result<()> {
        match image.kind {
            ImageKind::Remote => {
                ensure_parent_dir(dest)?;
                self.downloader.download(&image.target, dest)?;
                debug!("Downloaded {} -> {}", image.target, dest.display());
            }
            ImageKind::AbsoluteLocal => {
                copy_file(Path::new(&image.target), dest)?;
                debug!("Copied {} -> {}", image.target, dest.display());
            }
            ImageKind::Relative => {}
        }
        Ok(())
    }
}

/// Rebuilds `body` with each image's target span swapped for its replacement.
/// Spans starting before the end of an earlier rewrite are left alone.
fn splice_targets(body: &str, rewrites: &[(&ImageRef, String)]) -> String {
    let mut ordered: Vec<_> = rewrites.iter().collect();
    ordered.sort_by_key(|(image, _)| image.target_span.start);

    let mut out = String::with_capacity(body.len());
    let mut cursor = 0;
    for (image, replacement) in ordered {
        if image.target_span.start < cursor {
            continue;
        }
        out.push_str(&body[cursor..image.target_span.start]);
        out.push_str(replacement);
        cursor = image.target_span.end;
    }
    out.push_str(&body[cursor..]);
    out
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| NuevoError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Streams `from` into `to`, creating the destination's directories.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let copy_err = |source| NuevoError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let mut original = File::open(from).map_err(copy_err)?;
    ensure_parent_dir(to)?;
    let mut copy = File::create(to).map_err(copy_err)?;
    io::copy(&mut original, &mut copy).map_err(copy_err)?;
    Ok(())
}
