//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};

/// inglued - source-level dependency manager for header-only C++ libraries
#[derive(Parser)]
#[command(name = "inglued")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch or update every dependency in deps/inglued and hoist theirs
    Sync,

    /// Generate CMakeLists.txt and cmake/modules/Config.cmake.in
    Cmake(CmakeArgs),

    /// Write editable templates for `inglued cmake`
    Cmaketpl,

    /// List direct and transitive dependencies
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct CmakeArgs {
    /// Organization, used as CMake namespace
    pub org: String,

    /// Project name
    pub project: String,

    /// Folder with the project's headers (defaults to the project name)
    pub srcs: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
