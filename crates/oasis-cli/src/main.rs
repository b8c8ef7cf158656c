use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use oasis_cli::commands::App;
use oasis_cli::config::{self, OasisConfig};
use oasis_core::AssessmentId;
use oasis_core::intake::AssessmentInput;
use oasis_export::ExportFormat;
use oasis_instruments::all_instruments;
use oasis_storage::JsonFileRepository;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oasis")]
#[command(about = "Physical-functional assessment records and reports")]
struct Cli {
    /// Config file (default: <config dir>/oasis/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an assessment from a form JSON file and export its report
    New {
        /// Form data (JSON)
        #[arg(long)]
        input: PathBuf,
        /// pdf, docx or md
        #[arg(long, default_value = "pdf")]
        format: ExportFormat,
    },
    /// List saved assessments
    List,
    /// Print a text preview of a saved assessment
    Show { id: AssessmentId },
    /// Export a saved assessment again
    Export {
        id: AssessmentId,
        #[arg(long, default_value = "pdf")]
        format: ExportFormat,
        /// Output directory (default: configured output_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Delete a saved assessment
    Remove { id: AssessmentId },
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
    /// Print the reference bands of every instrument
    Bands,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    match cli.command {
        Command::Config { init } => show_config(&config, &config_path, init),
        Command::Bands => {
            for instrument in all_instruments() {
                println!("{}", instrument.describe_bands());
            }
            Ok(())
        }
        command => {
            let repo = JsonFileRepository::new(&config.data_file);
            run(App::new(config, Box::new(repo)), command)
        }
    }
}

fn run(app: App, command: Command) -> Result<()> {
    match command {
        Command::New { input, format } => {
            let contents = std::fs::read_to_string(&input)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", input.display()))?;
            let form = AssessmentInput::from_json(&contents)?;

            let problems = form.validate();
            if !problems.is_empty() {
                for problem in &problems {
                    eprintln!("{}: {}", problem.field, problem.message);
                }
                return Err(eyre::eyre!("{} invalid field(s)", problems.len()));
            }

            let created = app.create(form, format)?;
            println!("{}", created.record.id);
            match created.report {
                Ok(path) => println!("{}", path.display()),
                Err(e) => {
                    eprintln!(
                        "assessment saved, but the report failed; retry with `oasis export {}`",
                        created.record.id
                    );
                    return Err(e);
                }
            }
        }
        Command::List => {
            let summaries = app.list()?;
            if summaries.is_empty() {
                println!("Nenhuma avaliação salva.");
            }
            for summary in summaries {
                println!("{}", summary.line());
            }
        }
        Command::Show { id } => print!("{}", app.preview(id)?),
        Command::Export { id, format, out } => {
            let path = app.export(id, format, out.as_deref())?;
            println!("{}", path.display());
        }
        Command::Remove { id } => {
            let removed = app.remove(id)?;
            println!("removed {} ({})", removed.id, removed.patient.name);
        }
        Command::Config { .. } | Command::Bands => {}
    }
    Ok(())
}

fn show_config(config: &OasisConfig, path: &std::path::Path, init: bool) -> Result<()> {
    if init {
        config::save_config(config, path)?;
    }
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
