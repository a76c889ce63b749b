use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{WrapErr, bail};
use divsim::{OutputFormat, init_logging, plan, report};

#[derive(Parser, Debug)]
#[command(name = "divsim")]
#[command(about = "Month-by-month dividend income simulator")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a plan file and print the dividend tables
    Run {
        /// Path to the YAML plan
        plan: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Only show the monthly calendar for this year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Write a sample plan starting this year
    Init {
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Run { plan, format, year } => {
            let config = plan::load_plan(&plan)?;
            let result = divsim_core::simulate(&config)
                .wrap_err_with(|| format!("invalid plan {}", plan.display()))?;

            let output = match format {
                OutputFormat::Text => report::render_text(&config, &result, year),
                OutputFormat::Json => report::render_json(&result)?,
            };
            println!("{output}");
        }
        Command::Init { path, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            let start_year = i32::from(jiff::Zoned::now().year());
            plan::save_plan(&path, &plan::sample_plan(start_year))?;
            println!("Wrote sample plan to {}", path.display());
        }
    }

    tracing::debug!("divsim finished");
    Ok(())
}
