use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};

use roasplan::scenario::parse_portfolio;
use roasplan::{Scenario, context_snapshot, init_logging, report};
use roasplan_core::analysis::{SweepConfig, SweepInput, sweep};
use roasplan_core::evaluate;
use roasplan_core::model::ClientParameters;

#[derive(Parser, Debug)]
#[command(name = "roasplan")]
#[command(about = "IP-ROAS advertising economics calculator")]
struct Args {
    /// Path to the scenario YAML file
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Portfolio CSV appended to the scenario's products
    #[arg(short, long)]
    products: Option<PathBuf>,

    /// Override the scenario's ad spend (IP)
    #[arg(long)]
    ad_spend: Option<f64>,

    /// Override the scenario's fixed fee (TF)
    #[arg(long)]
    fixed_fee: Option<f64>,

    /// Override the scenario's expected income (IE)
    #[arg(long)]
    expected_income: Option<f64>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the scenario and print the result bundle
    Evaluate,
    /// Run a sensitivity sweep over one input
    Sweep {
        /// The input to vary
        #[arg(short, long, value_enum)]
        input: SweepInputArg,

        /// Number of points in the sweep
        #[arg(short = 'n', long, default_value_t = SweepConfig::DEFAULT_STEP_COUNT)]
        points: usize,
    },
    /// Print the context snapshot handed to the chat assistant
    Snapshot,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SweepInputArg {
    AdSpend,
    FixedFee,
    ExpectedIncome,
    GrossMargin,
}

impl From<SweepInputArg> for SweepInput {
    fn from(arg: SweepInputArg) -> Self {
        match arg {
            SweepInputArg::AdSpend => SweepInput::AdSpend,
            SweepInputArg::FixedFee => SweepInput::FixedFee,
            SweepInputArg::ExpectedIncome => SweepInput::ExpectedIncome,
            SweepInputArg::GrossMargin => SweepInput::GrossMargin,
        }
    }
}

fn load_parameters(args: &Args) -> color_eyre::Result<ClientParameters> {
    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };

    if let Some(value) = args.ad_spend {
        scenario.ad_spend = value;
    }
    if let Some(value) = args.fixed_fee {
        scenario.fixed_fee = value;
    }
    if let Some(value) = args.expected_income {
        scenario.expected_income = value;
    }

    let base_dir = args
        .scenario
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new("."));
    let mut params = scenario.into_parameters(base_dir)?;

    if let Some(path) = &args.products {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read portfolio CSV {}", path.display()))?;
        params.products.extend(parse_portfolio(&text, path));
    }

    Ok(params)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let params = load_parameters(&args)?;
    tracing::debug!(
        "evaluating {} products (ad_spend={}, fixed_fee={}, expected_income={})",
        params.products.len(),
        params.ad_spend,
        params.fixed_fee,
        params.expected_income
    );

    match args.command {
        Command::Evaluate => {
            let results = evaluate(&params);
            if args.json {
                println!("{}", report::render_results_json(&results)?);
            } else {
                print!("{}", report::render_results_text(&results));
            }
        }
        Command::Sweep { input, points } => {
            let config = SweepConfig {
                input: input.into(),
                step_count: points.max(1),
            };
            let points = sweep(&config, &params).ok_or_else(|| {
                eyre!("the scenario has no products; a sweep needs a critical product to anchor it")
            })?;
            if args.json {
                println!("{}", report::render_sweep_json(&points)?);
            } else {
                print!("{}", report::render_sweep_text(&config, &points));
            }
        }
        Command::Snapshot => {
            let results = evaluate(&params);
            print!("{}", context_snapshot(&params, &results));
        }
    }

    Ok(())
}
