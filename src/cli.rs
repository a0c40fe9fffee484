//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vinv - virtualization inventory CLI
///
/// Browse the inventory tree of a virtualization platform from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "vinv",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inventory listing CLI for virtualization platforms",
    long_about = "vinv browses the hierarchical inventory of a virtualization platform \
                  (datacenters, folders, compute resources, networks, datastores, \
                  virtual machines) the way 'ls' browses a filesystem.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  vinv ls\n    \
                  vinv ls -l vm\n    \
                  vinv --dc dc2 ls host network\n    \
                  vinv --json ls 'vm/web*'\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/asyrjasalo/vinv"
)]
pub struct Cli {
    /// Inventory snapshot file to browse
    #[arg(long, global = true, env = "VINV_INVENTORY", value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    /// Datacenter to resolve relative paths against
    #[arg(long, global = true, env = "VINV_DATACENTER", value_name = "NAME")]
    pub dc: Option<String>,

    /// Emit results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List inventory paths
    Ls(LsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the ls command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the datacenter root:\n    vinv ls\n\n\
                  Long listing with object kinds:\n    vinv ls -l\n\n\
                  List a folder's children:\n    vinv ls vm\n\n\
                  Glob against sibling names:\n    vinv ls 'vm/web*'\n\n\
                  Several paths at once:\n    vinv ls host network datastore")]
pub struct LsArgs {
    /// Inventory paths to list (defaults to the datacenter root)
    pub paths: Vec<String>,

    /// Long listing format
    #[arg(long = "long", short = 'l')]
    pub long: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    vinv completions --shell bash > ~/.bash_completion.d/vinv\n\n\
                  Generate zsh completions:\n    vinv completions --shell zsh > ~/.zfunc/_vinv\n\n\
                  Generate fish completions:\n    vinv completions --shell fish > ~/.config/fish/completions/vinv.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
