//! Git subtree materializer.
//!
//! Dependencies are vendored into the project's own history with
//! `git subtree ... --squash`, so consumers of the project get the headers
//! without any submodule or symlink setup.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::{Descriptor, GlueError, GlueResult};
use crate::sources::Materializer;
use crate::util::config::Config;
use crate::util::process::{find_git, ProcessBuilder};
use crate::util::shell::{Shell, Status};

/// Subtree operation for a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtreeAction {
    /// First fetch
    Add,
    /// Update of an existing directory
    Pull,
}

impl SubtreeAction {
    fn as_str(self) -> &'static str {
        match self {
            SubtreeAction::Add => "add",
            SubtreeAction::Pull => "pull",
        }
    }

    fn done_status(self) -> Status {
        match self {
            SubtreeAction::Add => Status::Added,
            SubtreeAction::Pull => Status::Updated,
        }
    }
}

/// Materializes dependencies with `git subtree`.
pub struct GitSubtree {
    /// git executable
    git: PathBuf,

    /// Repository root; git runs from here
    root: PathBuf,

    /// Where dependency directories live
    deps_root: PathBuf,

    /// Host for `org/name` shorthands
    host: String,

    shell: Shell,
}

impl GitSubtree {
    /// Create a materializer for the repository at `root`.
    pub fn new(root: &Path, config: &Config, shell: Shell) -> Result<Self> {
        let Some(git) = find_git() else {
            bail!(
                "git not found\n\
                 \n\
                 git is required to fetch dependencies.\n\
                 Install git and ensure it's in your PATH."
            );
        };

        Ok(GitSubtree {
            git,
            root: root.to_path_buf(),
            deps_root: config.paths.deps_root.clone(),
            host: config.git.host.clone(),
            shell,
        })
    }

    /// Whether the next materialization of `canonical_name` adds or pulls.
    pub fn action_for(&self, canonical_name: &str) -> SubtreeAction {
        if self.deps_root.join(canonical_name).exists() {
            SubtreeAction::Pull
        } else {
            SubtreeAction::Add
        }
    }

    /// The `git` invocation for `desc`.
    pub fn command(&self, desc: &Descriptor) -> GlueResult<ProcessBuilder> {
        let name = desc.canonical_name()?;
        let action = self.action_for(&name);

        Ok(ProcessBuilder::new(&self.git)
            .args(["subtree", action.as_str(), "--prefix"])
            .arg(self.prefix(&name))
            .arg(desc.fetch_location(&self.host))
            .arg(desc.reference())
            .arg("--squash")
            .cwd(&self.root))
    }

    /// Dependency directory relative to the repository root, `/`-separated.
    fn prefix(&self, canonical_name: &str) -> String {
        let dir = self.deps_root.join(canonical_name);
        let relative = dir.strip_prefix(&self.root).unwrap_or(&dir);

        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Materializer for GitSubtree {
    fn materialize(&mut self, desc: &Descriptor) -> GlueResult<()> {
        let action = self.action_for(&desc.canonical_name()?);
        let cmd = self.command(desc)?;
        self.shell.status(Status::Fetching, desc);

        let pb = self.shell.spinner(cmd.display_command());
        let result = cmd.exec();
        pb.finish_and_clear();

        let failure = |detail: String| GlueError::MaterializationFailure {
            identity: desc.identity().to_string(),
            detail,
        };

        let output = result.map_err(|e| failure(format!("{:#}", e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failure(stderr.trim().to_string()));
        }

        self.shell.status(action.done_status(), desc);
        Ok(())
    }
}
