//! Prepares a new Hugo blog post: creates the stub, localizes images,
//! fills front matter and appends the body.
pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod input;
pub mod localize;
pub mod model;
pub mod output;
pub mod path_format;
pub mod scan;
pub mod tools;

pub use app::{check_site_root, run, Outcome};
pub use config::{BodySource, Config};
pub use context::RunContext;
pub use error::{NuevoError, Result};
pub use localize::{Download, HttpDownloader, Localized, LocalizedAsset, Localizer};
pub use model::{ImageKind, ImageRef, Post};
pub use tools::{ProcessTools, SiteTools};
