// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "code_tally",
    version,
    about = "Count lines of code per language across a project"
)]
pub struct Args {
    #[command(flatten)]
    pub scope: ScopeOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Directories to count, ahead of the configured ones
    #[arg(value_hint = ValueHint::DirPath, help_heading = "Scope")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ScopeOptions {
    /// Project root holding the settings file
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath, help_heading = "Scope")]
    pub root: PathBuf,

    /// Replace the configured include directories (comma separated)
    #[arg(long, value_delimiter = ',', help_heading = "Scope")]
    pub include: Option<Vec<String>>,

    /// Replace the configured exclude globs (comma separated)
    #[arg(long, value_delimiter = ',', help_heading = "Scope")]
    pub exclude: Option<Vec<String>>,

    /// Ask for include directories and exclude globs before counting
    #[arg(short, long, help_heading = "Scope")]
    pub interactive: bool,

    /// Do not write the include/exclude lists back to the settings file
    #[arg(long, help_heading = "Scope")]
    pub no_save: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// Include dotfiles and dot-directories
    #[arg(long, help_heading = "Scan")]
    pub hidden: bool,

    /// Respect .gitignore and .ignore files
    #[arg(long, help_heading = "Scan")]
    pub gitignore: bool,

    /// Follow symbolic links
    #[arg(short = 'L', long, help_heading = "Scan")]
    pub follow: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Print the language table in lookup order and exit
    #[arg(long, help_heading = "Output")]
    pub list_languages: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
}
