use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use hugo_nuevo::{BodySource, Config, Download, NuevoError, RunContext, SiteTools};
use tempfile::TempDir;

const ARCHETYPE: &str = "---\ntitle: \"{{ title }}\"\ndate: 2022-02-05\ndraft: true\nimage: \"\"\n---\n\n";

/// Writes the archetype like `hugo new` would, and records editor calls.
struct FakeHugo {
    root: PathBuf,
    fail_stub: bool,
    edited: RefCell<Vec<PathBuf>>,
}

impl FakeHugo {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            fail_stub: false,
            edited: RefCell::new(Vec::new()),
        }
    }
}

impl SiteTools for FakeHugo {
    fn create_stub(&self, post_path: &str) -> hugo_nuevo::Result<()> {
        if self.fail_stub {
            return Err(NuevoError::Command {
                command: format!("hugo new {post_path}"),
                reason: "exit status: 255".into(),
            });
        }
        let path = self.root.join("content").join(post_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, ARCHETYPE).unwrap();
        Ok(())
    }

    fn open_editor(&self, _editor: &str, path: &Path) -> hugo_nuevo::Result<()> {
        self.edited.borrow_mut().push(path.to_path_buf());
        Err(NuevoError::Command {
            command: "vim".into(),
            reason: "exit status: 1".into(),
        })
    }
}

struct FakeDownloader;

impl Download for FakeDownloader {
    fn download(&self, url: &str, dest: &Path) -> hugo_nuevo::Result<()> {
        fs::write(dest, format!("fetched {url}")).unwrap();
        Ok(())
    }
}

fn site() -> (TempDir, RunContext) {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("archetypes")).unwrap();
    let ctx = RunContext::new(dir.path(), NaiveDate::from_ymd_opt(2022, 2, 5).unwrap());
    (dir, ctx)
}

fn write_input(dir: &TempDir, body: &str) -> BodySource {
    fs::write(dir.path().join("draft.md"), body).unwrap();
    BodySource::File("draft.md".into())
}

#[test]
fn refuses_to_run_outside_a_site() {
    let dir = TempDir::new().unwrap();
    let ctx = RunContext::new(dir.path(), NaiveDate::from_ymd_opt(2022, 2, 5).unwrap());
    let hugo = FakeHugo::new(dir.path());

    let err = hugo_nuevo::run(&Config::default(), &ctx, &hugo, &FakeDownloader).unwrap_err();

    assert!(matches!(err, NuevoError::NotSiteRoot(_)));
    assert!(!dir.path().join("content").exists());
}

#[test]
fn prepares_post_with_header_image_and_publish() {
    let (dir, ctx) = site();
    let body = format!(
        "![cover](http://example.com/cover.jpg)\n\nSome words.\n\n![inline](http://example.com/b.png)\n\n![local](pics/c.gif)\n\n{}\n",
        "A long closing paragraph. ".repeat(40)
    );
    let config = Config {
        input: write_input(&dir, &body),
        title: Some("Hello, World!".into()),
        publish: true,
        editor: Some("vim".into()),
        ..Config::default()
    };
    let hugo = FakeHugo::new(dir.path());

    let outcome = hugo_nuevo::run(&config, &ctx, &hugo, &FakeDownloader).unwrap();

    assert_eq!(outcome.post_path, "blog/2022/02/hello-world.md");
    assert_eq!(
        outcome.post.header_image.as_deref(),
        Some("images/2022/hello-world/001.jpg")
    );
    assert_eq!(outcome.assets.len(), 2);

    let images = dir.path().join("assets/images/2022/hello-world");
    assert_eq!(
        fs::read_to_string(images.join("001.jpg")).unwrap(),
        "fetched http://example.com/cover.jpg"
    );
    assert!(images.join("002.png").exists());

    let stub = fs::read_to_string(dir.path().join("content/blog/2022/02/hello-world.md")).unwrap();
    assert!(stub.contains("draft: false"));
    assert!(stub.contains("image: \"images/2022/hello-world/001.jpg\""));
    assert!(stub.contains("![inline](images/2022/hello-world/002.png)"));
    assert!(stub.contains("![local](pics/c.gif)"));
    assert!(!stub.contains("![cover]"));

    // Editor failures are not fatal.
    assert_eq!(*hugo.edited.borrow(), [outcome.stub_path]);
}

#[test]
fn short_post_keeps_leading_image_inline() {
    let (dir, ctx) = site();
    let config = Config {
        input: write_input(&dir, "![cover](http://example.com/cover.jpg)\n\nShort post."),
        title: Some("Short".into()),
        ..Config::default()
    };
    let hugo = FakeHugo::new(dir.path());

    let outcome = hugo_nuevo::run(&config, &ctx, &hugo, &FakeDownloader).unwrap();

    assert_eq!(outcome.post.header_image, None);
    let stub = fs::read_to_string(&outcome.stub_path).unwrap();
    assert!(stub.contains("image: \"\""));
    assert!(stub.contains("![cover](images/2022/short/001.jpg)"));
}

#[test]
fn title_comes_from_body_when_not_given() {
    let (dir, ctx) = site();
    let config = Config {
        input: write_input(&dir, "Opening line.\n- # Found Title\nClosing line.\n"),
        ..Config::default()
    };
    let hugo = FakeHugo::new(dir.path());

    let outcome = hugo_nuevo::run(&config, &ctx, &hugo, &FakeDownloader).unwrap();

    assert_eq!(outcome.post.title, "Found Title");
    assert_eq!(outcome.post_path, "blog/2022/02/found-title.md");
    let stub = fs::read_to_string(&outcome.stub_path).unwrap();
    assert!(stub.starts_with(ARCHETYPE));
    assert!(stub.ends_with("Opening line.\nClosing line.\n"));
    assert!(stub.contains("draft: true"));
}

#[test]
fn stub_failure_is_not_fatal() {
    let (dir, ctx) = site();
    let config = Config {
        input: write_input(&dir, "Just text."),
        title: Some("Plain".into()),
        slug: Some("custom".into()),
        path_format: "posts/#y-#m-#d-#s.md".into(),
        ..Config::default()
    };
    let mut hugo = FakeHugo::new(dir.path());
    hugo.fail_stub = true;

    let outcome = hugo_nuevo::run(&config, &ctx, &hugo, &FakeDownloader).unwrap();

    assert_eq!(outcome.post_path, "posts/2022-02-5-custom.md");
    assert_eq!(fs::read_to_string(&outcome.stub_path).unwrap(), "Just text.\n");
    assert!(hugo.edited.borrow().is_empty());
}

#[test]
fn empty_input_file_stops_the_run() {
    let (dir, ctx) = site();
    let config = Config {
        input: write_input(&dir, "\n\n"),
        title: Some("Nothing".into()),
        ..Config::default()
    };
    let hugo = FakeHugo::new(dir.path());

    let err = hugo_nuevo::run(&config, &ctx, &hugo, &FakeDownloader).unwrap_err();

    assert!(matches!(err, NuevoError::EmptyBody));
}
