//! Runs the steps of preparing a post, in order.

use crate::config::Config;
use crate::context::RunContext;
use crate::error::{NuevoError, Result};
use crate::extract::{extract_header_image, extract_title};
use crate::input::read_body;
use crate::localize::{Download, LocalizedAsset, Localizer};
use crate::model::Post;
use crate::output::finalize_stub;
use crate::path_format::{resolve, resolve_slug};
use crate::tools::SiteTools;
use log::{info, warn};
use std::path::PathBuf;

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub post: Post,
    /// Path handed to the site generator, relative to `content/`.
    pub post_path: String,
    /// Absolute path of the stub file.
    pub stub_path: PathBuf,
    pub assets: Vec<LocalizedAsset>,
}

/// Fails unless `ctx.root` looks like a Hugo site.
pub fn check_site_root(ctx: &RunContext) -> Result<()> {
    if ctx.join("archetypes").is_dir() {
        Ok(())
    } else {
        Err(NuevoError::NotSiteRoot(ctx.root.clone()))
    }
}

/// Prepares a post: stub, localized images, front matter, body, editor.
///
/// Collaborator failures are logged and skipped. Everything else stops the run.
pub fn run<T: SiteTools, D: Download>(
    config: &Config,
    ctx: &RunContext,
    tools: &T,
    downloader: &D,
) -> Result<Outcome> {
    check_site_root(ctx)?;

    let mut post = Post {
        body: read_body(&config.input, &ctx.root)?,
        title: config.title.clone().unwrap_or_default(),
        slug: config.slug.clone().filter(|s| !s.is_empty()),
        publish: config.publish,
        header_image: None,
    };

    if post.title.is_empty() {
        let (body, title) = extract_title(&post.body);
        if let Some(title) = title {
            info!("Using title from body: {title}");
            post.body = body;
            post.title = title;
        }
    }

    let post_path = resolve(&config.path_format, &post.title, post.slug.as_deref(), ctx);
    let stub_path = ctx.join("content").join(&post_path);

    match tools.create_stub(&post_path) {
        Ok(()) => info!("Created stub {}", stub_path.display()),
        Err(e) => warn!("{e}"),
    }

    let slug = resolve_slug(&post.title, post.slug.as_deref());
    let asset_dir = format!(
        "{}/{}/{}",
        config.asset_path.trim_end_matches('/'),
        ctx.year(),
        slug
    );
    let localized = Localizer::new(downloader, &ctx.root, &config.strip_prefix)
        .localize(&post.body, &asset_dir)?;

    let (body, header_image) = extract_header_image(&localized.body);
    post.body = body;
    post.header_image = header_image;

    finalize_stub(
        &stub_path,
        &post.body,
        post.publish,
        post.header_image.as_deref(),
    )?;
    info!("Wrote {}", stub_path.display());

    if let Some(editor) = config.editor.as_deref().filter(|e| !e.is_empty()) {
        if let Err(e) = tools.open_editor(editor, &stub_path) {
            warn!("{e}");
        }
    }

    Ok(Outcome {
        post,
        post_path,
        stub_path,
        assets: localized.assets,
    })
}
