use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use savings_calc::domain::money::Money;
use savings_calc::domain::ports::FeeScheduleRegistry;
use savings_calc::infrastructure::in_memory::InMemoryRegistry;
use savings_calc::interfaces::csv::breakdown_writer::BreakdownWriter;
use savings_calc::interfaces::csv::fee_schedule_reader::FeeScheduleReader;
use savings_calc::interfaces::report::ReportWriter;
use savings_calc::{BusinessInputs, CostComparisonEngine, Preset, ProcessorId};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fee schedule CSV replacing the built-in reference rates.
    #[arg(long, global = true)]
    fee_schedules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare the current processor against the platform and the future rail.
    Compare(CompareArgs),
    /// List the registered fee schedules.
    Processors,
}

#[derive(clap::Args)]
struct CompareArgs {
    /// Restaurant profile to start from; explicit flags override it.
    #[arg(long)]
    preset: Option<Preset>,

    /// Monthly card volume per location, in dollars.
    #[arg(long, allow_hyphen_values = true)]
    volume: Option<Decimal>,

    /// Average transaction size, in dollars.
    #[arg(long)]
    avg_ticket: Option<Decimal>,

    /// Number of locations.
    #[arg(long)]
    locations: Option<u32>,

    /// Current processor id (see `processors`).
    #[arg(long, default_value = "toast")]
    processor: ProcessorId,

    /// Share of volume taken in person, 0-100.
    #[arg(long, default_value = "80", allow_hyphen_values = true)]
    card_present: Decimal,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

impl CompareArgs {
    fn to_inputs(&self) -> BusinessInputs {
        let mut inputs = BusinessInputs::default();
        if let Some(preset) = self.preset {
            info!(preset = preset.label(), "applying preset");
            inputs = inputs.with_preset(preset);
        }
        if let Some(volume) = self.volume {
            inputs.monthly_card_volume = Money::new(volume);
        }
        if let Some(ticket) = self.avg_ticket {
            inputs.average_transaction_size = Money::new(ticket);
        }
        if let Some(locations) = self.locations {
            inputs.location_count = locations;
        }
        inputs.current_processor = self.processor;
        inputs.card_present_percent = self.card_present;
        inputs
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let registry = if let Some(path) = cli.fee_schedules {
        info!(path = %path.display(), "loading fee schedules");
        let file = File::open(path).into_diagnostic()?;
        FeeScheduleReader::new(file).into_registry().into_diagnostic()?
    } else {
        InMemoryRegistry::reference()
    };

    let stdout = io::stdout();
    match cli.command {
        Command::Processors => {
            let ids = registry.processor_ids();
            let schedules = ids
                .iter()
                .map(|id| registry.lookup(*id))
                .collect::<savings_calc::Result<Vec<_>>>()
                .into_diagnostic()?;
            ReportWriter::new(stdout.lock())
                .write_schedules(schedules)
                .into_diagnostic()?;
        }
        Command::Compare(args) => {
            let inputs = args.to_inputs();
            let engine = CostComparisonEngine::new(registry);
            let result = engine.compare(&inputs).into_diagnostic()?;

            match args.format {
                Format::Table => ReportWriter::new(stdout.lock())
                    .write_comparison(&result)
                    .into_diagnostic()?,
                Format::Json => {
                    serde_json::to_writer_pretty(stdout.lock(), &result).into_diagnostic()?;
                    println!();
                }
                Format::Csv => BreakdownWriter::new(stdout.lock())
                    .write_breakdown(&result.breakdown)
                    .into_diagnostic()?,
            }
        }
    }

    Ok(())
}
