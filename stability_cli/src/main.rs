//! # Stability CLI Application
//!
//! Terminal front end for the intact stability engine. Reads a stability
//! book (JSON), analyzes its loading conditions and prints a report followed
//! by the JSON result, so the output serves both people and tools.
//!
//! ## Usage
//!
//! ```text
//! stability_cli sample > trader.json
//! stability_cli analyze trader.json --case Departure
//! stability_cli batch trader.json --min-gm 0.30
//! stability_cli wind --speed 25 --area 1100 --height 6.5 --displacement 14200 --gm 0.65
//! ```
//!
//! Logs go to stderr (`RUST_LOG` or `--log-level`), reports to stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stability_core::book::StabilityBook;
use stability_core::calculations::{wind_heeling, AnalysisResult, WindHeeling};
use stability_core::config::AnalysisConfig;
use stability_core::errors::{CalcResult, StabilityError};
use stability_core::file_io::{load_book, to_json_pretty};
use stability_core::sample::{sample_cases, sample_vessel};

/// Intact stability calculations for loading conditions
#[derive(Parser)]
#[command(name = "stability_cli")]
#[command(about = "Ship intact stability analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "STABILITY_LOG", default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one loading case of a stability book
    Analyze {
        /// Stability book (JSON)
        book: PathBuf,

        /// Loading case name; defaults to the first case in the book
        #[arg(short, long)]
        case: Option<String>,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Analyze every loading case of a stability book
    Batch {
        /// Stability book (JSON)
        book: PathBuf,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Standalone wind heeling check
    Wind {
        /// Beam wind speed (m/s)
        #[arg(long)]
        speed: f64,

        /// Lateral windage area (m²)
        #[arg(long)]
        area: f64,

        /// Height of the windage center above the waterline (m)
        #[arg(long)]
        height: f64,

        /// Displacement (t)
        #[arg(long)]
        displacement: f64,

        /// Metacentric height (m)
        #[arg(long)]
        gm: f64,
    },

    /// Print a sample stability book to start from
    Sample,
}

/// Command-line overrides of the book's analysis settings.
#[derive(Args, Default)]
struct ConfigOverrides {
    /// Minimum initial GM (m)
    #[arg(long, env = "STABILITY_MIN_GM")]
    min_gm: Option<f64>,

    /// Heel angle step of the GZ curve (degrees)
    #[arg(long)]
    heel_step: Option<f64>,

    /// Beam wind speed for the wind heeling check (m/s)
    #[arg(long, env = "STABILITY_WIND_SPEED")]
    wind_speed: Option<f64>,

    /// Limit area ranges at the downflooding angle
    #[arg(long)]
    cap_downflooding: bool,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(min_gm) = self.min_gm {
            config.criteria.min_gm_m = min_gm;
        }
        if let Some(step) = self.heel_step {
            config.heel_range.step_deg = step;
        }
        if self.wind_speed.is_some() {
            config.wind_speed_mps = self.wind_speed;
        }
        if self.cap_downflooding {
            config.cap_areas_at_downflooding = true;
        }
    }
}

fn init_tracing(cli: &Cli) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let outcome = match &cli.command {
        Commands::Analyze {
            book,
            case,
            overrides,
        } => run_analyze(book, case.as_deref(), overrides),
        Commands::Batch { book, overrides } => run_batch(book, overrides),
        Commands::Wind {
            speed,
            area,
            height,
            displacement,
            gm,
        } => run_wind(*speed, *area, *height, *displacement, *gm),
        Commands::Sample => run_sample(),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = to_json_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn open_book(path: &Path, overrides: &ConfigOverrides) -> CalcResult<StabilityBook> {
    let mut book = load_book(path)?;
    overrides.apply(&mut book.config);
    Ok(book)
}

fn run_analyze(
    path: &Path,
    case: Option<&str>,
    overrides: &ConfigOverrides,
) -> CalcResult<ExitCode> {
    let book = open_book(path, overrides)?;
    let name = match case {
        Some(name) => name.to_string(),
        None => book
            .cases
            .first()
            .map(|c| c.name.clone())
            .ok_or_else(|| {
                StabilityError::invalid_input("cases", "[]", "The book has no loading cases")
            })?,
    };

    let result = book.analyze_case(&name)?;
    print_report(&result);

    println!();
    println!("JSON Output (for LLM/API use):");
    println!("{}", to_json_pretty(&result)?);

    Ok(exit_code(result.passes()))
}

fn run_batch(path: &Path, overrides: &ConfigOverrides) -> CalcResult<ExitCode> {
    let book = open_book(path, overrides)?;
    let results = book.analyze_all();

    println!("═══════════════════════════════════════════════════════════");
    println!("  {} - {} LOADING CONDITIONS", book.meta.vessel_name.to_uppercase(), results.len());
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("  {:<20} {:>10} {:>8} {:>8}  {}", "Case", "Disp (t)", "T (m)", "GM (m)", "Status");

    let mut all_pass = true;
    let mut analyzed = Vec::with_capacity(results.len());
    for (case, result) in book.cases.iter().zip(results) {
        match result {
            Ok(r) => {
                all_pass &= r.passes();
                println!(
                    "  {:<20} {:>10.1} {:>8.3} {:>8.3}  {}{}",
                    r.case_name,
                    r.loading_summary.total_displacement_t,
                    r.draft_trim.mean_draft_m,
                    r.gm_m,
                    status_icon(r.passes()),
                    if r.reliable { "" } else { " (unreliable)" }
                );
                analyzed.push(r);
            }
            Err(e) => {
                all_pass = false;
                println!("  {:<20} {}", case.name, e);
            }
        }
    }

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  RESULT: {}", if all_pass { "ALL CONDITIONS PASS" } else { "FAIL" });
    println!("═══════════════════════════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    println!("{}", to_json_pretty(&analyzed)?);

    Ok(exit_code(all_pass))
}

fn run_wind(
    speed: f64,
    area: f64,
    height: f64,
    displacement: f64,
    gm: f64,
) -> CalcResult<ExitCode> {
    let wind = wind_heeling(speed, area, height, displacement, gm)?;

    println!("═══════════════════════════════════════");
    println!("  WIND HEELING");
    println!("═══════════════════════════════════════");
    print_wind(&wind);
    println!();
    println!("JSON Output (for LLM/API use):");
    println!("{}", to_json_pretty(&wind)?);

    Ok(exit_code(wind.stability_margin_m >= 0.0))
}

fn run_sample() -> CalcResult<ExitCode> {
    let mut book = StabilityBook::new(sample_vessel(), "Sample");
    for case in sample_cases() {
        book.add_case(case);
    }
    println!("{}", to_json_pretty(&book)?);
    Ok(ExitCode::SUCCESS)
}

fn print_report(result: &AnalysisResult) {
    let summary = &result.loading_summary;
    let dt = &result.draft_trim;
    let curve = &result.stability_curve;

    println!("═══════════════════════════════════════");
    println!("  STABILITY ANALYSIS: {}", result.case_name);
    println!("═══════════════════════════════════════");
    println!();
    println!("Loading:");
    println!(
        "  Displacement: {:.1} t (deadweight {:.1} t)",
        summary.total_displacement_t,
        summary.deadweight_t()
    );
    println!("  KG:           {:.3} m", summary.kg_m);
    println!("  LCG:          {:.3} m", summary.lcg_m);
    println!("  TCG:          {:.3} m", summary.tcg_m);
    println!("  ΣFSM:         {:.1} t·m", summary.fsm_sum_tm);
    println!();
    println!("Floating Position:");
    println!("  Mean draft:   {:.3} m", dt.mean_draft_m);
    println!("  Fwd / Aft:    {:.3} / {:.3} m", dt.forward_draft_m, dt.aft_draft_m);
    println!("  Trim:         {:.3} m ({:.2}°)", dt.trim_m, dt.trim_angle_deg);
    println!("  List:         {:.2}°", result.list_angle_deg);
    println!();
    println!("Stability:");
    println!("  KMt:          {:.3} m", dt.kmt_m);
    println!("  KG corrected: {:.3} m", result.kg_corrected_m);
    println!("  GMt:          {:.3} m", result.gm_m);
    println!("  Max GZ:       {:.3} m at {:.0}°", curve.max_gz_m, curve.max_gz_angle_deg);
    println!("  Vanishing:    {:.0}°", curve.vanishing_angle_deg);
    println!();
    println!("Criteria:");
    for check in &result.criteria.compliance {
        println!(
            "  {:<16} {:>8.3} (min {:.3}) {}{}",
            check.name,
            check.value,
            check.requirement,
            status_icon(check.passed),
            if check.critical { "" } else { " advisory" }
        );
    }

    if let Some(wind) = &result.wind {
        println!();
        println!("Wind:");
        print_wind(wind);
    }

    if !result.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  {}", warning);
        }
    }

    if !result.issues.is_empty() {
        println!();
        println!("Issues (results may be unreliable):");
        for issue in &result.issues {
            println!("  {}", issue);
        }
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", if result.passes() { "PASS" } else { "FAIL" });
    println!("═══════════════════════════════════════");
}

fn print_wind(wind: &WindHeeling) {
    println!("  Wind speed:   {:.1} m/s", wind.wind_speed_mps);
    println!("  Heeling arm:  {:.4} m", wind.heeling_arm_m);
    println!("  Heel angle:   {:.2}°", wind.heel_angle_deg);
    println!(
        "  Margin:       {:.3} m {}",
        wind.stability_margin_m,
        status_icon(wind.stability_margin_m >= 0.0)
    );
    if let Some(critical) = wind.critical_wind_speed_mps {
        println!("  Critical:     {:.1} m/s", critical);
    }
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn status_icon(ok: bool) -> &'static str {
    if ok {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
