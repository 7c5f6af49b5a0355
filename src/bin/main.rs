//! Pairwise matrix command line interface
//!
//! Computes distance and kernel matrices between CSV feature files and
//! writes them as JSON or CSV.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info, warn};
use ndarray::Array2;
use pairwise_kernels::core::{KernelParams, KernelType, MetricError, Result};
use pairwise_kernels::persistence::{save_csv, write_csv, SerializableMatrix};
use pairwise_kernels::FeatureMatrix;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "pairwise")]
#[command(about = "Pairwise distance and kernel matrices")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "pairwise-kernels contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the pairwise Euclidean distance matrix
    Distance(DistanceArgs),
    /// Compute a pairwise kernel matrix
    Kernel(KernelArgs),
    /// Display a saved matrix summary
    Info(InfoArgs),
}

#[derive(Args)]
struct InputArgs {
    /// First feature matrix (CSV, one sample per row)
    #[arg(long)]
    x: PathBuf,

    /// Second feature matrix; defaults to the first
    #[arg(long)]
    y: Option<PathBuf>,

    /// Output file (prints CSV to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: auto, json, or csv
    #[arg(long, default_value = "auto")]
    output_format: String,
}

#[derive(Args)]
struct DistanceArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args)]
struct KernelArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Kernel function
    #[arg(short, long)]
    kernel: Option<CliKernelType>,

    /// Kernel parameters file (JSON); command line values take precedence
    #[arg(long)]
    params: Option<PathBuf>,

    /// Kernel bandwidth (default: 1 / n_features)
    #[arg(short, long)]
    gamma: Option<f64>,

    /// Polynomial degree (default: 3)
    #[arg(long)]
    degree: Option<u32>,

    /// Independent term for polynomial and sigmoid kernels (default: 1)
    #[arg(long, allow_hyphen_values = true)]
    coef: Option<f64>,
}

#[derive(ValueEnum, Clone, Debug)]
enum CliKernelType {
    /// Linear kernel: x · y
    #[value(name = "linear")]
    Linear,
    /// Gaussian RBF kernel: exp(-gamma ||x - y||²)
    #[value(name = "rbf")]
    Rbf,
    /// Polynomial kernel: (gamma x · y + coef)^degree
    #[value(name = "polynomial")]
    Polynomial,
    /// Sigmoid kernel: tanh(gamma x · y + coef)
    #[value(name = "sigmoid")]
    Sigmoid,
}

impl From<CliKernelType> for KernelType {
    fn from(cli_kernel: CliKernelType) -> Self {
        match cli_kernel {
            CliKernelType::Linear => KernelType::Linear,
            CliKernelType::Rbf => KernelType::Rbf,
            CliKernelType::Polynomial => KernelType::Polynomial,
            CliKernelType::Sigmoid => KernelType::Sigmoid,
        }
    }
}

#[derive(Args)]
struct InfoArgs {
    /// Matrix file written with JSON output
    #[arg(short, long)]
    matrix: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Distance(args) => distance_command(args),
        Commands::Kernel(args) => kernel_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn distance_command(args: DistanceArgs) -> Result<()> {
    run(&args.input, KernelParams::new(KernelType::Euclidean))
}

fn kernel_command(args: KernelArgs) -> Result<()> {
    let mut params = match &args.params {
        Some(path) => {
            info!("Loading kernel parameters from: {:?}", path);
            KernelParams::load_from_file(path)?
        }
        None => KernelParams::default(),
    };

    if let Some(kernel) = args.kernel {
        params.kind = kernel.into();
    }
    if params.kind == KernelType::Euclidean {
        return Err(MetricError::InvalidParameter(
            "euclidean is a distance, use the distance command".to_string(),
        ));
    }
    if let Some(gamma) = args.gamma {
        params.gamma = Some(gamma);
    }
    if let Some(degree) = args.degree {
        params.degree = degree;
    }
    if let Some(coef) = args.coef {
        params.coef = coef;
    }

    if !params.kind.uses_gamma() && params.gamma.is_some() {
        warn!("gamma is ignored by the {} kernel", params.kind.as_str());
    }

    run(&args.input, params)
}

fn run(input: &InputArgs, params: KernelParams) -> Result<()> {
    info!("Loading x from: {:?}", input.x);
    let x = FeatureMatrix::from_file(&input.x)?;
    info!(
        "Loaded {} samples with {} features",
        x.n_samples(),
        x.n_features()
    );

    let y = match &input.y {
        Some(path) => {
            info!("Loading y from: {:?}", path);
            let y = FeatureMatrix::from_file(path)?;
            info!(
                "Loaded {} samples with {} features",
                y.n_samples(),
                y.n_features()
            );
            Some(y)
        }
        None => None,
    };

    let params = params.resolved(x.view())?;
    info!("Computing {} matrix", params.kind.as_str());
    let matrix = params.compute(x.view(), y.as_ref().map(|y| y.view()))?;
    info!("Result shape: {} x {}", matrix.nrows(), matrix.ncols());

    write_output(input, &matrix, params, y.is_none())
}

fn write_output(
    input: &InputArgs,
    matrix: &Array2<f64>,
    params: KernelParams,
    self_paired: bool,
) -> Result<()> {
    let output_path = match &input.output {
        Some(path) => path,
        None => return write_csv(matrix.view(), std::io::stdout().lock()),
    };

    let format = if input.output_format == "auto" {
        detect_format(output_path)
    } else {
        input.output_format.clone()
    };

    match format.as_str() {
        "json" => {
            SerializableMatrix::new(matrix.view(), params, self_paired).save_to_file(output_path)?
        }
        "csv" => save_csv(matrix.view(), output_path)?,
        _ => {
            return Err(MetricError::InvalidParameter(format!(
                "Unsupported output format: {format}. Use 'json' or 'csv'"
            )))
        }
    }

    info!("Matrix saved to: {:?}", output_path);
    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    info!("Loading matrix from: {:?}", args.matrix);
    let matrix = SerializableMatrix::load_from_file(&args.matrix)?;
    matrix.print_summary();

    let values = matrix.to_array()?;
    if !values.is_empty() {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        println!("Range: [{:.6}, {:.6}]", min, max);
    }

    Ok(())
}

fn detect_format(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => "json".to_string(),
        Some("csv") => "csv".to_string(),
        _ => {
            warn!("Unknown output extension, writing JSON");
            "json".to_string()
        }
    }
}
