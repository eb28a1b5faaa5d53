//! Prepares a new blog post for a Hugo site.
use anyhow::{Context, Result};
use clap::Parser;
use hugo_nuevo::config::{self, BodySource, Config};
use hugo_nuevo::{HttpDownloader, ProcessTools, RunContext};

/// Commandline arguments.
#[derive(Parser, Debug)]
#[command(name = "nuevo", about = "Creates a Hugo post and localizes its images")]
struct Cli {
    /// The markdown file to post; `-` reads standard input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// The location of image files.
    #[arg(short, long = "assets", value_name = "DIR", default_value = config::DEFAULT_ASSET_PATH)]
    asset_path: String,

    /// Set the title of the post.
    #[arg(short, long)]
    title: Option<String>,

    /// Set a custom slug; defaults to the title.
    #[arg(short, long)]
    slug: Option<String>,

    /// Editor command to open the resulting file with.
    #[arg(short, long, value_name = "CMD")]
    editor: Option<String>,

    /// The path of the new post under content/.
    #[arg(short = 'p', long = "path", value_name = "FORMAT", default_value = config::DEFAULT_PATH_FORMAT)]
    path_format: String,

    /// Set the draft status to false.
    #[arg(long)]
    publish: bool,

    /// Prefix removed from rewritten image links.
    #[arg(long, value_name = "PREFIX", default_value = config::DEFAULT_STRIP_PREFIX)]
    strip_prefix: String,

    /// Hugo binary used to create the stub.
    #[arg(long, env = "NUEVO_HUGO", value_name = "BIN", default_value = config::DEFAULT_HUGO)]
    hugo: String,

    /// Display version number.
    #[arg(short = 'v', long)]
    version: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: BodySource::from_arg(cli.input.as_deref()),
            asset_path: cli.asset_path,
            title: cli.title,
            slug: cli.slug,
            editor: cli.editor,
            path_format: cli.path_format,
            publish: cli.publish,
            strip_prefix: cli.strip_prefix,
            hugo: cli.hugo,
        }
    }
}

fn run_on_args(args: impl Iterator<Item = std::ffi::OsString>) -> Result<()> {
    let args = Cli::parse_from(args);
    if args.version {
        println!("hugo-nuevo: v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::from(args);
    let ctx = RunContext::capture().context("Unable to get current directory")?;
    let tools = ProcessTools::new(&config.hugo, &ctx.root);
    let downloader = HttpDownloader::new()?;

    let outcome = hugo_nuevo::run(&config, &ctx, &tools, &downloader)
        .context("Could not prepare the post")?;
    log::info!(
        "Post ready at {} ({} image(s) localized)",
        outcome.stub_path.display(),
        outcome.assets.len()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run_on_args(std::env::args_os()) {
        println!("Error: {:?}", e);
        std::process::exit(1);
    }
}
