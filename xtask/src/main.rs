use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "optional workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test suite across the feature matrix
    Test,
    /// Run the Optional vs Option benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const FEATURE_SETS: &[&str] = &["", "tracing", "proptest", "tracing,proptest"];

const BENCH_NAME: &str = "optional_benchmark";

/// The two implementations every benchmark group compares.
const IMPLS: &[&str] = &["optional", "core_option"];

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    group_id: String,
    function_id: Option<String>,
    value_str: Option<String>,
    throughput: Option<ThroughputInfo>,
}

#[derive(Deserialize)]
enum ThroughputInfo {
    Elements(u64),
    Bytes(u64),
    BytesDecimal(u64),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test => run_tests()?,
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_tests() -> Result<()> {
    for features in FEATURE_SETS {
        let label = if features.is_empty() { "default" } else { features };
        println!("\n>>> Testing with features: {}", label);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.args(["test", "--package", "optional"]);
        if !features.is_empty() {
            cmd.args(["--features", features]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run tests for {}", label))?;
        if !status.success() {
            anyhow::bail!("Tests failed with features: {}", label);
        }
        println!("Finished {} in {:.2?}", label, start.elapsed());
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running Optional vs Option benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH_NAME]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run benchmarks")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    // workload -> implementation -> ops/s
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Optional vs Option Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | optional (Ops/s) | core_option (Ops/s) | ratio |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (workload, by_impl) in &results {
        write!(file, "| {} |", workload)?;
        for name in IMPLS {
            match by_impl.get(*name) {
                Some(ops) => write!(file, " {} |", format_ops(*ops))?,
                None => write!(file, " N/A |")?,
            }
        }
        match (by_impl.get("optional"), by_impl.get("core_option")) {
            (Some(ours), Some(base)) if *base > 0.0 => writeln!(file, " **{:.2}x** |", ours / base)?,
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{:.0}", ops)
    }
}

/// Walks criterion's output looking for `new/estimates.json` next to a `benchmark.json`.
fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }

        let info_path = run_dir.join("benchmark.json");
        let Ok(info_raw) = fs::read_to_string(&info_path) else { continue };
        let info: BenchmarkInfo = serde_json::from_str(&info_raw)
            .with_context(|| format!("Malformed {}", info_path.display()))?;
        let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&path)?)
            .with_context(|| format!("Malformed {}", path.display()))?;

        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }
        let elements = match info.throughput {
            Some(ThroughputInfo::Elements(n)) => n as f64,
            Some(ThroughputInfo::Bytes(_)) | Some(ThroughputInfo::BytesDecimal(_)) | None => 1.0,
        };
        let metric = (elements * 1e9) / time_ns;

        let Some(function) = info.function_id else { continue };
        let workload = match info.value_str {
            Some(value) => format!("{}/{}", info.group_id, value),
            None => info.group_id,
        };

        results.entry(workload).or_default().insert(function, metric);
    }

    Ok(())
}
