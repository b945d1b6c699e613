use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wellscore::cli::{Cli, Commands, ScoreArgs, ValidateArgs};
use wellscore::io;
use wellscore::scores::{inflammation, metabolic, oxygen};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score(args) => run_score(args),
        Commands::Validate(args) => run_validate(args),
    }
}

fn run_score(args: ScoreArgs) -> Result<()> {
    let profile = io::read_profile(&args.input)?;
    let report = io::json_writer::build_report(&profile);

    if let Some(out) = &args.out {
        io::write_json(out, &report)?;
        tracing::info!(path = %out.display(), "report written");
    }
    if !args.quiet {
        print!("{}", io::summary::format_summary(&report));
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let profile = io::read_profile(&args.input)?;
    println!("wellscore validate ok");
    println!("markers: {}", profile.biomarkers.len());
    let status = match profile.is_menstruating {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unset",
    };
    println!("is_menstruating: {}", status);

    print_coverage(
        "metabolic",
        &metabolic::extract_components(&profile.biomarkers).entries(),
    );
    print_coverage(
        "inflammation",
        &inflammation::extract_components(&profile.biomarkers).entries(),
    );
    print_coverage(
        "oxygen",
        &oxygen::extract_components(&profile.biomarkers).entries(),
    );
    Ok(())
}

fn print_coverage(pipeline: &str, entries: &[(&'static str, Option<f64>)]) {
    let resolved = entries.iter().filter(|(_, v)| v.is_some()).count();
    let status = if resolved >= 2 { "ok" } else { "insufficient" };
    println!("{}: {}/{} resolved ({})", pipeline, resolved, entries.len(), status);
    for (name, value) in entries {
        match value {
            Some(v) => println!("  {}: {:.4}", name, v),
            None => println!("  {}: missing", name),
        }
    }
}
