use std::path::PathBuf;

pub const DEFAULT_ASSET_PATH: &str = "assets/images";
pub const DEFAULT_PATH_FORMAT: &str = "blog/#y/#m/#s.md";
pub const DEFAULT_STRIP_PREFIX: &str = "assets/";
pub const DEFAULT_HUGO: &str = "hugo";

/// Where the post body comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BodySource {
    /// No body; only the stub is created.
    #[default]
    None,
    Stdin,
    File(PathBuf),
}

impl BodySource {
    /// `-` means standard input.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") => BodySource::None,
            Some("-") => BodySource::Stdin,
            Some(path) => BodySource::File(PathBuf::from(path)),
        }
    }
}

/// Options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: BodySource,
    /// Root of the image asset tree, relative to the site.
    pub asset_path: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub editor: Option<String>,
    /// Post path template under `content/`.
    pub path_format: String,
    pub publish: bool,
    /// Removed once from rewritten image links.
    pub strip_prefix: String,
    pub hugo: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: BodySource::None,
            asset_path: DEFAULT_ASSET_PATH.to_string(),
            title: None,
            slug: None,
            editor: None,
            path_format: DEFAULT_PATH_FORMAT.to_string(),
            publish: false,
            strip_prefix: DEFAULT_STRIP_PREFIX.to_string(),
            hugo: DEFAULT_HUGO.to_string(),
        }
    }
}
