use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use encscan_core::prepare::ensure_optimized;
use encscan_core::{
    DetectionConfig, Detector, EncScanError, LoggingProgress, ProbeKind, ProgressCallback, RuleSet,
    SignatureEngine, TestKind, TestResult,
};
use encscan_filesystems::probe_for;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "encscan")]
#[command(about = "Statistical encryption detection for disk images and files", long_about = None)]
struct Cli {
    /// Log at debug level and report read progress
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct DetectionArgs {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Read block size in bytes
    #[arg(long)]
    block_size: Option<usize>,
    /// Filesystem probe (native, parted, auto)
    #[arg(long)]
    probe: Option<ProbeKind>,
    /// Analyse the `_opt` sibling with all-zero regions removed
    #[arg(long)]
    optimize: bool,
    /// Scan every block for every encryption tool signature
    #[arg(long)]
    hail_mary: bool,
    /// Run the statistical tests concurrently
    #[arg(long)]
    parallel: bool,
}

impl DetectionArgs {
    fn load(&self) -> anyhow::Result<DetectionConfig> {
        let mut config = match &self.config {
            Some(path) => DetectionConfig::from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => DetectionConfig::default(),
        };
        if let Some(block_size) = self.block_size {
            config.block_size = block_size;
        }
        if let Some(probe) = self.probe {
            config.probe = probe;
        }
        config.optimize |= self.optimize;
        config.hail_mary |= self.hail_mary;
        config.parallel |= self.parallel;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Catalogue {
    /// Encryption tool header signatures
    Tools,
    /// Generic file-format signatures
    Files,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more inputs
    Classify {
        /// Disk images, partitions or files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print reports as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        detection: DetectionArgs,
    },
    /// Run every statistical test without classifying
    Stats {
        path: PathBuf,
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        detection: DetectionArgs,
    },
    /// Scan for encryption tool and file-format signatures
    Signatures {
        path: PathBuf,
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        detection: DetectionArgs,
    },
    /// Report the filesystem detected on an input
    Probe {
        path: PathBuf,
        /// Filesystem probe (native, parted, auto)
        #[arg(long, default_value = "native")]
        probe: ProbeKind,
    },
    /// Write the `_opt` sibling with all-zero regions removed
    Optimize { path: PathBuf },
    /// List signature rule names
    Catalogue {
        #[arg(value_enum)]
        kind: Catalogue,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_detector(config: DetectionConfig, verbose: bool) -> anyhow::Result<Detector> {
    let engine = Arc::new(SignatureEngine::builtin().context("compiling signature rules")?);
    let probe = probe_for(config.probe);
    let detector = Detector::new(config, engine, probe)?;
    Ok(if verbose {
        detector.with_progress(Arc::new(LoggingProgress))
    } else {
        detector
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify {
            paths,
            json,
            detection,
        } => {
            let detector = Arc::new(build_detector(detection.load()?, cli.verbose)?);
            tracing::debug!(
                "classifying {} inputs with block size {}",
                paths.len(),
                detector.config().block_size
            );
            let mut handles = Vec::with_capacity(paths.len());
            for path in paths {
                let detector = detector.clone();
                let input = path.clone();
                handles.push((path, tokio::task::spawn_blocking(move || detector.classify(&input))));
            }

            let mut failures = 0;
            let mut reports = Vec::new();
            for (path, handle) in handles {
                match handle.await {
                    Ok(Ok(report)) => reports.push(report),
                    Ok(Err(e)) => {
                        failures += 1;
                        eprintln!("{}: {} ({})", path.display(), e, e.kind());
                    }
                    Err(e) => {
                        failures += 1;
                        tracing::error!("{}: classification task failed: {}", path.display(), e);
                    }
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}\n", report);
                }
            }
            if failures > 0 {
                anyhow::bail!("{} of {} inputs could not be classified", failures, failures + reports.len());
            }
        }
        Commands::Stats {
            path,
            json,
            detection,
        } => {
            let config = detection.load()?;
            let thresholds = config.thresholds;
            let detector = build_detector(config, cli.verbose)?;
            let battery = tokio::task::spawn_blocking(move || detector.run_battery(&path).map(|b| (path, b)))
                .await?;
            let (path, battery) = battery.context("running statistical tests")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&battery)?);
            } else {
                println!("Input: {}", path.display());
                print_results(&battery.results(&thresholds));
                println!(
                    "KS max gap at byte 0x{:02x} over {} bytes; critical values {:.6} (0.01), {:.6} (0.05)",
                    battery.histogram.ks.max_diff_position,
                    battery.histogram.ks.bytes_read,
                    battery.histogram.ks.critical_value_001,
                    battery.histogram.ks.critical_value_005
                );
                for ratio in &battery.compression.ratios {
                    println!("  {}: {} bytes (ratio {:.4})", ratio.name, ratio.compressed_bytes, ratio.ratio);
                }
                println!("Votes: {}/5", battery.vote_count(&thresholds));
            }
        }
        Commands::Signatures {
            path,
            json,
            detection,
        } => {
            let config = detection.load()?;
            let engine = SignatureEngine::builtin().context("compiling signature rules")?;
            let (tools, tally) = tokio::task::spawn_blocking(move || {
                let progress: Arc<dyn ProgressCallback> = Arc::new(LoggingProgress);
                let tools = if config.hail_mary {
                    engine.scan_tools_hail_mary(&path, config.block_size, progress.clone())
                } else {
                    engine.scan_tools(&path, config.block_size, progress.clone())
                }?;
                let tally = engine.signature_density(&path, config.block_size, progress)?;
                Ok::<_, EncScanError>((tools, tally))
            })
            .await??;

            if json {
                let value = serde_json::json!({ "tools": tools, "files": tally });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("Encryption tools: {}", tools.summary());
                for failure in &tools.failures {
                    println!("  skipped {}: {}", failure.rule, failure.reason);
                }
                println!(
                    "File signatures: {} matches over {:.2} MB ({:.2} per MB)",
                    tally.total_matches, tally.size_mb, tally.density
                );
                for (name, count) in &tally.counts {
                    println!("  {}: {}", name, count);
                }
            }
        }
        Commands::Probe { path, probe } => {
            let probe = probe_for(probe);
            let fs = probe
                .probe(&path)
                .with_context(|| format!("probing {}", path.display()))?;
            let shown = if fs.is_empty() { "(none)" } else { fs.as_str() };
            println!("{}: {} [{} probe]", path.display(), shown, probe.name());
        }
        Commands::Optimize { path } => {
            let summary = ensure_optimized(&path)
                .with_context(|| format!("optimizing {}", path.display()))?;
            println!(
                "{}: {} -> {} bytes{}",
                summary.output.display(),
                summary.input_bytes,
                summary.output_bytes,
                if summary.created { "" } else { " (existing)" }
            );
        }
        Commands::Catalogue { kind } => {
            let rules = match kind {
                Catalogue::Tools => RuleSet::encryption_tools()?,
                Catalogue::Files => RuleSet::file_formats()?,
            };
            for rule in rules.rules() {
                println!("{}\t{:?}", rule.name(), rule.mode());
            }
            println!("\n{} rules", rules.len());
        }
    }

    Ok(())
}

fn print_results(results: &[TestResult]) {
    for result in results {
        let marker = match result.kind {
            TestKind::ChiSquared => " ",
            _ if result.indicates_encryption => "+",
            _ => "-",
        };
        println!("  {} {}", marker, result);
    }
}
