mod config;
mod plan_cmds;

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use coach_core::{PlanInputs, SectionKind};

#[derive(Parser)]
#[command(
    name = "coach",
    version,
    about = "Generate deterministic marketing plans from a few business inputs"
)]
struct Cli {
    /// Config file path (overrides COACH_CONFIG env var)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file with the default plan inputs
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate the full plan as a single document
    Plan {
        #[command(flatten)]
        inputs: InputArgs,
        /// Emit the plan as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate a single section
    Section {
        /// Section: segments, pains, dreams, pillars, ideas, calendar, or offer
        #[arg(value_parser = parse_section_kind)]
        kind: SectionKind,
        #[command(flatten)]
        inputs: InputArgs,
        /// Emit the section data as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Format section data from a JSON file (use - for stdin)
    Render {
        /// Path to the JSON file
        file: String,
        /// Section title for the header line
        #[arg(long)]
        name: String,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Plan input flags shared by the generating commands.
///
/// Unset flags fall through to COACH_* env vars, then the config file, then
/// built-in defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Business niche (e.g. "fitness coaching", "B2B SaaS")
    #[arg(long)]
    pub niche: Option<String>,
    /// Target audience (e.g. "B2B founders", "DTC brands")
    #[arg(long)]
    pub audience: Option<String>,
    /// Product type (e.g. "program", "accelerator", "course")
    #[arg(long)]
    pub product: Option<String>,
    /// The specific outcome the product delivers
    #[arg(long)]
    pub transformation: Option<String>,
    /// Timeframe or price context (e.g. "8-12 weeks", "$3k-$6k")
    #[arg(long)]
    pub price_range: Option<String>,
    /// Comma-separated growth goals
    #[arg(long)]
    pub goals: Option<String>,
    /// Calendar start date (YYYY-MM-DD); empty means today
    #[arg(long)]
    pub start_date: Option<String>,
}

fn parse_section_kind(s: &str) -> Result<SectionKind, String> {
    s.parse::<SectionKind>().map_err(|e| e.to_string())
}

/// Execute the `coach init` command: write config file.
fn cmd_init(path: &std::path::Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        inputs: config::InputsSection::from(&PlanInputs::starter()),
    };
    config::save_config(path, &cfg)?;

    println!("Config written to {}", path.display());
    println!();
    println!("Edit the [inputs] table, then run `coach plan` to generate a plan.");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = config::config_path(cli.config.as_deref());

    match cli.command {
        Commands::Init { force } => cmd_init(&config_path, force)?,
        Commands::Plan {
            inputs,
            json,
            output,
        } => {
            let file = config::load_config(&config_path)?;
            let resolved = config::resolve_inputs(&inputs, file.as_ref());
            plan_cmds::run_plan(&resolved, json, output.as_deref())?;
        }
        Commands::Section { kind, inputs, json } => {
            let file = config::load_config(&config_path)?;
            let resolved = config::resolve_inputs(&inputs, file.as_ref());
            plan_cmds::run_section(&resolved, kind, json)?;
        }
        Commands::Render { file, name } => plan_cmds::run_render(&file, &name)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "coach", &mut std::io::stdout());
        }
    }

    Ok(())
}
