use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "wellscore", version, about = "Biomarker wellness scoring CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Score(ScoreArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    #[arg(long, help = "Profile JSON with a biomarkers map and optional is_menstruating flag")]
    pub input: PathBuf,

    #[arg(long, help = "Write the JSON report here")]
    pub out: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Suppress the terminal summary")]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Profile JSON to check for marker coverage")]
    pub input: PathBuf,
}
