use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::model::ProgressBasis;
use crate::session::{Scope, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "drivefind", about = "Search local drives for a file by its exact name")]
pub struct Cli {
    /// Exact, case-sensitive file name to look for (prompted when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Search every available drive
    #[arg(short, long, conflicts_with_all = ["drive", "root"])]
    pub all: bool,

    /// Search a single drive, given by its letter
    #[arg(short, long, value_name = "LETTER", conflicts_with = "root")]
    pub drive: Option<String>,

    /// Search this directory tree instead of drive roots
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// How the progress total of a volume is estimated
    #[arg(long, value_enum, default_value_t = ProgressBasis::Capacity)]
    pub estimate: ProgressBasis,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Do not descend into symbolic links to directories
    #[arg(long)]
    pub no_follow_links: bool,

    /// Do not draw the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Prompt answers already given on the command line
    pub fn session_config(&self) -> SessionConfig {
        let scope = if self.all {
            Some(Scope::All)
        } else if let Some(root) = &self.root {
            Some(Scope::Root(
                std::path::absolute(root).unwrap_or_else(|_| root.clone()),
            ))
        } else {
            self.drive.clone().map(Scope::Drive)
        };

        SessionConfig {
            name: self.name.clone(),
            scope,
            basis: self.estimate,
        }
    }

    /// Default tracing directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
