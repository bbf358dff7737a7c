//! CLI interface for Blueprint.
//!
//! Each subcommand is non-interactive: arguments in, plans out.
//!
//! - `blueprint generate --niche <text>` — generate and print the three plans.
//! - `blueprint options` — list the platforms, goals, and vibes on offer.
//!
//! Flags not given on the command line fall back to the config file, then
//! to the built-in defaults.

mod format;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use crate::config::Config;
use crate::generate::generate_plans;
use crate::model::{FormState, GOALS, PLATFORMS, Plan, VIBES, in_catalog};
use crate::render::render_plans;

use format::{describe_output, format_options};

/// Blueprint — viral content plans for your niche.
#[derive(Debug, Parser)]
#[command(name = "blueprint", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Config file to read defaults from.
    /// Defaults to `~/.blueprint/config.toml` when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Examples:
  blueprint generate --niche "Bollywood fitness transformations"
  blueprint generate --niche "street food" --audience "college students" \
      --platform "Instagram Reels" --vibe "Relatable friend next door"
  blueprint generate --niche fitness --format json --out plans.json
  blueprint options"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate three content plans for a niche.
    ///
    /// The niche must have at least two characters once trimmed.
    /// Plans are written to `--out` (if given) or stdout.
    Generate(GenerateArgs),

    /// List the platforms, goals, and vibes on offer.
    ///
    /// The current default for each is marked with `*`.
    Options,
}

/// Form fields for `generate`.
///
/// Platform, goal, and vibe accept any text; see `blueprint options`
/// for the values the templates are written for.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Content niche (e.g. "Bollywood fitness transformations").
    #[arg(long)]
    pub niche: String,

    /// Target audience (e.g. "Busy young professionals").
    #[arg(long)]
    pub audience: Option<String>,

    /// Primary platform.
    #[arg(long)]
    pub platform: Option<String>,

    /// Core goal.
    #[arg(long)]
    pub goal: Option<String>,

    /// Creator vibe.
    #[arg(long)]
    pub vibe: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write the plans to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// How plans are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn text blocks.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Run the CLI, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Command::Generate(args) => cmd_generate(config, &args),
        Command::Options => {
            println!("{}", format_options(&config.form_defaults()));
            Ok(())
        }
    }
}

fn cmd_generate(config: &Config, args: &GenerateArgs) -> Result<(), String> {
    let form = resolve_form(config, args);
    if !form.can_submit() {
        return Err("niche must be at least two characters".to_string());
    }

    let plans = generate_plans(&form);
    let output = render_output(&plans, args.format)?;

    match &args.out {
        Some(path) => {
            fs::write(path, &output)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            info!("wrote {} plans to {}", plans.len(), path.display());
            eprintln!("{} → {}", describe_output(&form, args.format), path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

/// Merge command-line fields over config defaults.
///
/// Off-catalog platform, goal, or vibe values are kept but logged.
fn resolve_form(config: &Config, args: &GenerateArgs) -> FormState {
    let defaults = config.form_defaults();
    let form = FormState {
        niche: args.niche.clone(),
        audience: args.audience.clone().unwrap_or(defaults.audience),
        platform: args.platform.clone().unwrap_or(defaults.platform),
        goal: args.goal.clone().unwrap_or(defaults.goal),
        vibe: args.vibe.clone().unwrap_or(defaults.vibe),
    };

    for (field, catalog, value) in [
        ("platform", &PLATFORMS, &form.platform),
        ("goal", &GOALS, &form.goal),
        ("vibe", &VIBES, &form.vibe),
    ] {
        if !in_catalog(catalog, value) {
            warn!("{field} {value:?} is not one of the offered options");
        }
    }

    form
}

fn render_output(plans: &[Plan], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(render_plans(plans)),
        OutputFormat::Json => serde_json::to_string_pretty(plans)
            .map_err(|e| format!("failed to serialize plans: {e}")),
    }
}
