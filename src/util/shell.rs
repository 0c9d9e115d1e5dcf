//! Centralized console output.
//!
//! All user-facing status lines go to stderr as `{status:>12} {message}`,
//! cargo style. Diagnostics that only matter when debugging go through
//! `tracing` instead.

use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Nothing, no spinners
    Quiet,
    /// Status messages and spinners
    #[default]
    Normal,
    /// Status messages, no spinners (they would garble debug logs)
    Verbose,
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Added,
    Updated,
    Hoisted,
    Generated,
    Created,
    Finished,

    // In-progress statuses (cyan)
    Fetching,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Added => "Added",
            Status::Updated => "Updated",
            Status::Hoisted => "Hoisted",
            Status::Generated => "Generated",
            Status::Created => "Created",
            Status::Finished => "Finished",
            Status::Fetching => "Fetching",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Added
            | Status::Updated
            | Status::Hoisted
            | Status::Generated
            | Status::Created
            | Status::Finished => "\x1b[1;32m",
            Status::Fetching => "\x1b[1;36m",
        }
    }
}

const STATUS_WIDTH: usize = 12;

/// Central shell for all CLI output.
#[derive(Debug, Clone)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
    interactive: bool,
}

impl Shell {
    /// Create a shell; colors are only used when stderr is a terminal.
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        let interactive = io::stderr().is_terminal();
        Shell {
            verbosity,
            use_color: color && interactive,
            interactive,
        }
    }

    /// A shell that prints nothing.
    pub fn quiet() -> Self {
        Shell {
            verbosity: Verbosity::Quiet,
            use_color: false,
            interactive: false,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Print a status message.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_quiet() {
            return;
        }
        eprintln!("{} {}", self.format_status(status), msg);
    }

    /// A spinner for a blocking step, hidden when it would not render.
    pub fn spinner(&self, msg: impl Display) -> ProgressBar {
        if self.verbosity != Verbosity::Normal || !self.interactive {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();

        if self.use_color {
            format!(
                "{}{:>width$}\x1b[0m",
                status.color_code(),
                text,
                width = STATUS_WIDTH
            )
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }
}
