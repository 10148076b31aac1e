use clap::Parser;

use crate::breathing::technique::Technique;

/// Terminal breathing visualizer: cycles color-coded Inhale/Hold/Exhale phases until interrupted.
#[derive(Debug, Parser)]
#[command(name = "mindful_breathing", version, about)]
pub struct Args {
    /// Start this technique directly instead of prompting on stdin
    #[arg(short, long, value_enum)]
    pub technique: Option<Technique>,

    /// Print the available techniques and exit
    #[arg(short, long)]
    pub list: bool,

    /// With --list, print the techniques as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Render the status line without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
