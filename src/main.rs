use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use inventory_dynamics::analysis::sampling::{sample_rows, DEFAULT_SAMPLE_SIZE};
use inventory_dynamics::io::reporting;
use inventory_dynamics::{
    scenario_curves, summarize, InventorySimulation, PolicyParams, RunCache, SimulationView,
};
use log::{info, warn};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "inventory-dynamics", version)]
#[command(about = "Reorder-point inventory simulation: daily trace, KPIs and scenario curves")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate one policy, print the KPIs and export the daily trace
    Run {
        #[command(flatten)]
        params: ParamArgs,

        /// CSV file for the full daily trace
        #[arg(long, default_value = "simulation_results.csv")]
        output: PathBuf,

        /// Rows of the trace to print, evenly spaced
        #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        samples: usize,
    },
    /// Answer one form submission (`days=30&seed=7`) with the view as JSON
    View {
        #[arg(long, default_value = "")]
        form: String,
    },
    /// Read one form submission per stdin line and answer each with a JSON view
    Dashboard,
    /// Export the baseline/step/ramp reference curves
    Scenarios {
        #[arg(long, default_value_t = 360)]
        days: usize,

        #[arg(long, default_value = "scenario_curves.csv")]
        output: PathBuf,
    },
}

#[derive(Debug, Args)]
struct ParamArgs {
    /// Simulation horizon in days
    #[arg(long, default_value_t = 180)]
    days: usize,
    #[arg(long, default_value_t = 800.0)]
    initial_stock: f64,
    #[arg(long, default_value_t = 300.0)]
    reorder_point: f64,
    /// Lot size ordered each time stock hits the reorder point
    #[arg(long, default_value_t = 600.0)]
    reorder_qty: f64,
    #[arg(long, default_value_t = 120.0)]
    mean_demand: f64,
    #[arg(long, default_value_t = 30.0)]
    demand_std: f64,
    /// Days between placing and receiving an order
    #[arg(long, default_value_t = 7)]
    lead_time: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl From<ParamArgs> for PolicyParams {
    fn from(args: ParamArgs) -> Self {
        Self {
            days: args.days,
            initial_stock: args.initial_stock,
            reorder_point: args.reorder_point,
            reorder_qty: args.reorder_qty,
            mean_demand: args.mean_demand,
            demand_std: args.demand_std,
            lead_time: args.lead_time,
            seed: args.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            params,
            output,
            samples,
        } => run(params.into(), &output, samples),
        Command::View { form } => view(&form),
        Command::Dashboard => dashboard(),
        Command::Scenarios { days, output } => {
            let curves = scenario_curves(days);
            reporting::write_scenarios_csv(&output, &curves)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Scenario curves for {} days written to {}", days, output.display());
            Ok(())
        }
    }
}

fn run(params: PolicyParams, output: &Path, samples: usize) -> Result<()> {
    println!("=== Reorder Point Inventory Simulation ===");

    // 1. INITIALIZE SIMULATION
    let mut sim = InventorySimulation::new(params).context("invalid simulation parameters")?;

    // 2. RUN SIMULATION
    info!("running simulation for {} days", sim.params().days);
    sim.run();
    let in_transit = sim.in_transit();
    let trace = sim.into_trace();

    // 3. EXPORT RESULTS
    reporting::write_trace_csv(output, &trace)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Daily trace written to ./{}", output.display());

    // 4. PRINT SUMMARY
    let summary = summarize(trace.records())?;
    println!("\n=== Summary ===");
    print!("{summary}");
    if in_transit > 0.0 {
        println!("Still in transit at horizon: {in_transit:.2}");
    }

    println!("\n=== Sampled Days ===");
    println!(
        "{:>5} {:>10} {:>10} {:>10} {:>8} {:>10}",
        "day", "stock", "delivered", "demand", "order", "backlog"
    );
    for record in sample_rows(&trace, samples) {
        println!(
            "{:>5} {:>10.2} {:>10.2} {:>10.2} {:>8.0} {:>10.2}",
            record.day, record.stock, record.deliveries, record.demand, record.order, record.backlog
        );
    }

    Ok(())
}

fn view(form: &str) -> Result<()> {
    let params = PolicyParams::from_query(form).context("invalid form submission")?;
    let view = SimulationView::build(&params)?;
    reporting::write_view_json(io::stdout().lock(), &view)?;
    Ok(())
}

fn dashboard() -> Result<()> {
    let cache = RunCache::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading submission")?;
        let submission = line.trim();
        if submission.is_empty() {
            continue;
        }

        let result = PolicyParams::from_query(submission)
            .and_then(|params| SimulationView::build_cached(&params, &cache));

        match result {
            Ok(view) => reporting::write_view_json(&mut stdout, &view)?,
            Err(err) => {
                warn!("rejected submission {submission:?}: {err}");
                writeln!(stdout, "{}", json!({ "error": err.to_string() }))?;
            }
        }
        stdout.flush()?;
    }

    info!("dashboard closed with {} cached runs", cache.len());
    Ok(())
}
