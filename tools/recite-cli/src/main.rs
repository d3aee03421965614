mod render;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use recite_clues::{fetch_clues, LookupClues};
use recite_engine::{Trainer, TrainerConfig};
use recite_protocol::{DifficultyLevel, GroupId};
use tracing_subscriber::EnvFilter;

use crate::render::Report;

#[derive(Parser)]
#[command(author, version, about = "Masks a passage for memorization practice")]
struct Cli {
    /// Passage to practice; `-` reads stdin
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// 1/scaffolding, 2/prediction or 3/generation. Overrides the config file.
    #[arg(short, long)]
    level: Option<DifficultyLevel>,

    /// JSON trainer configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON object mapping span text to a clue
    #[arg(long, value_name = "FILE")]
    clues: Option<PathBuf>,

    /// Group ids to activate, in order
    #[arg(short, long = "activate", value_name = "GROUP")]
    activations: Vec<u32>,

    /// Overrides the config file's placeholder
    #[arg(long)]
    placeholder: Option<char>,

    /// Print the full token and span state as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recite=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn read_input(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading passage from {:?}", path))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
            serde_json::from_str::<TrainerConfig>(&raw).with_context(|| format!("parsing config {:?}", path))?
        }
        None => TrainerConfig::default(),
    };
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(placeholder) = cli.placeholder {
        config.placeholder = placeholder;
    }

    let mut trainer = Trainer::new(config);
    trainer.set_text(read_input(&cli.input)?);

    if let Some(path) = &cli.clues {
        let raw = fs::read_to_string(path).with_context(|| format!("reading clues {:?}", path))?;
        let generator = LookupClues::from_json(&raw)?;
        if let Some(outcome) = fetch_clues(&mut trainer, &generator) {
            tracing::info!(?outcome, "clues applied");
        }
    }

    for group in &cli.activations {
        if trainer.activate(GroupId(*group)).is_none() {
            tracing::warn!(group, "no maskable span with this id");
        }
    }

    let report = Report::of(&trainer);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.rendered);
        println!();
        println!(
            "level {} | {} spans: {} masked, {} clued, {} revealed",
            report.level,
            report.progress.total,
            report.progress.masked,
            report.progress.clued,
            report.progress.revealed
        );
        for span in &report.spans {
            println!("  #{:<4} {:?}", span.group.get(), span.state);
        }
    }

    Ok(())
}
