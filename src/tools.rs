//! External programs the run hands work to.

use crate::error::{NuevoError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// The site generator and editor, as seen by the run.
pub trait SiteTools {
    /// Creates the content stub for `post_path` (relative to `content/`).
    fn create_stub(&self, post_path: &str) -> Result<()>;

    /// Opens `path` with the `editor` command.
    fn open_editor(&self, editor: &str, path: &Path) -> Result<()>;
}

/// Runs `hugo new` and the editor as child processes in the site root.
pub struct ProcessTools {
    hugo: String,
    root: PathBuf,
}

impl ProcessTools {
    pub fn new(hugo: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            hugo: hugo.into(),
            root: root.into(),
        }
    }
}

impl SiteTools for ProcessTools {
    fn create_stub(&self, post_path: &str) -> Result<()> {
        let mut cmd = Command::new(&self.hugo);
        cmd.arg("new").arg(post_path).current_dir(&self.root);
        run(cmd, format!("{} new {}", self.hugo, post_path))
    }

    fn open_editor(&self, editor: &str, path: &Path) -> Result<()> {
        let mut cmd = Command::new(editor);
        cmd.arg(path).current_dir(&self.root);
        run(cmd, format!("{} {}", editor, path.display()))
    }
}

fn run(mut cmd: Command, display: String) -> Result<()> {
    let status = cmd.status().map_err(|e| NuevoError::Command {
        command: display.clone(),
        reason: e.to_string(),
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(NuevoError::Command {
            command: display,
            reason: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_command_error() {
        let tools = ProcessTools::new("hugo-nuevo-no-such-binary", ".");
        let err = tools.create_stub("blog/post.md").unwrap_err();
        assert!(matches!(err, NuevoError::Command { ref command, .. }
            if command == "hugo-nuevo-no-such-binary new blog/post.md"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let tools = ProcessTools::new("false", ".");
        assert!(tools.open_editor("false", Path::new("post.md")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_ok() {
        let tools = ProcessTools::new("true", ".");
        assert!(tools.create_stub("blog/post.md").is_ok());
        assert!(tools.open_editor("true", Path::new("post.md")).is_ok());
    }
}
