//! entrycheck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use entrycheck_core::model::QualificationType;

mod commands;

#[derive(Parser)]
#[command(
    name = "entrycheck",
    version,
    about = "Minimum entry-requirement checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one applicant against the entry requirements
    Evaluate {
        /// Qualification: spm, olevel, uec
        #[arg(long, short)]
        qualification: QualificationType,

        /// Number of relevant credits
        #[arg(long, default_value = "")]
        credits: String,

        /// English grade
        #[arg(long, default_value = "")]
        english: String,

        /// Mathematics grade
        #[arg(long, default_value = "")]
        math: String,

        /// Bahasa Malaysia grade (SPM only)
        #[arg(long, default_value = "")]
        bm: String,

        /// Rule table file
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the rule table
    Rules {
        /// Only show this qualification
        #[arg(long, short)]
        qualification: Option<QualificationType>,

        /// Rule table file
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Validate a rule table file
    Validate {
        /// Path to rule table file
        #[arg(long)]
        rules: PathBuf,
    },

    /// Step through the checker screen on stdin
    Interactive {
        /// Rule table file
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Create a starter rule table
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("entrycheck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            qualification,
            credits,
            english,
            math,
            bm,
            rules,
            format,
        } => commands::evaluate::execute(qualification, credits, english, math, bm, rules, format),
        Commands::Rules {
            qualification,
            rules,
        } => commands::rules::execute(qualification, rules),
        Commands::Validate { rules } => commands::validate::execute(rules),
        Commands::Interactive { rules } => commands::interactive::execute(rules),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
