//! linear-svm Command Line Interface
//!
//! A command-line interface for training, evaluating, and applying linear
//! SVM models on dense whitespace-separated data files.

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use linear_svm::api::TrainedModel;
use linear_svm::core::Result;
use linear_svm::{Classifier, DenseDataset, Svm};
use std::path::PathBuf;
use std::process;

use log::{error, info};

#[derive(Parser)]
#[command(name = "linear-svm")]
#[command(about = "A Pegasos-style linear SVM trainer and classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
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
    /// Train a new model
    Train(TrainArgs),
    /// Classify instances using a trained model
    Predict(PredictArgs),
    /// Evaluate a model on labeled test data
    Evaluate(EvaluateArgs),
    /// Average several trained models into one
    Average(AverageArgs),
    /// Display model information
    Info(InfoArgs),
}

#[derive(Args)]
struct TrainArgs {
    /// Training data file (dense format: "label f1 f2 ... fd")
    #[arg(long)]
    data: PathBuf,

    /// Output weight-listing file
    #[arg(short, long)]
    output: PathBuf,

    /// Regularization strength lambda
    #[arg(short, long, default_value = "0.01")]
    lambda: f64,

    /// Iteration count T (performs T - 1 update steps)
    #[arg(short, long, default_value = "100")]
    iterations: usize,
}

#[derive(Args)]
struct PredictArgs {
    /// Trained model file (flat weight listing)
    #[arg(short, long)]
    model: PathBuf,

    /// Input data file
    #[arg(long)]
    data: PathBuf,

    /// Show decision values alongside labels
    #[arg(long)]
    confidence: bool,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Trained model file (flat weight listing)
    #[arg(short, long)]
    model: PathBuf,

    /// Test data file
    #[arg(long)]
    data: PathBuf,

    /// Show detailed metrics
    #[arg(long)]
    detailed: bool,
}

#[derive(Args)]
struct AverageArgs {
    /// Input model files (two or more)
    #[arg(required = true)]
    models: Vec<PathBuf>,

    /// Output weight-listing file
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
    /// Model file
    model: PathBuf,
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
        Commands::Train(args) => train_command(args),
        Commands::Predict(args) => predict_command(args),
        Commands::Evaluate(args) => evaluate_command(args),
        Commands::Average(args) => average_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn train_command(args: TrainArgs) -> Result<()> {
    info!("Training linear SVM model...");
    info!("Data file: {:?}", args.data);
    info!(
        "Parameters: lambda={}, iterations={}",
        args.lambda, args.iterations
    );

    let dataset = DenseDataset::from_file(&args.data)?;
    info!(
        "Loaded {} examples with {} dimensions",
        dataset.len(),
        dataset.dim()
    );

    let model = Svm::new()
        .with_lambda(args.lambda)
        .with_iterations(args.iterations)
        .train_dataset(&dataset)?;

    info!("Training completed successfully");

    model.save_to_file(&args.output)?;
    info!("Model saved to: {:?}", args.output);

    let accuracy = model.evaluate(dataset.examples())?;
    info!("Training accuracy: {:.2}%", accuracy * 100.0);

    Ok(())
}

fn predict_command(args: PredictArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let model = TrainedModel::load_from_file(&args.model)?;

    info!("Loading prediction data from: {:?}", args.data);
    let dataset = DenseDataset::from_file(&args.data)?;

    let predictions = model.predict_batch(dataset.examples())?;

    println!("# Predictions for {} instances", predictions.len());
    println!(
        "# Format: instance_index predicted_label{}",
        if args.confidence { " decision_value" } else { "" }
    );
    for (i, pred) in predictions.iter().enumerate() {
        if args.confidence {
            println!("{} {} {:.6}", i, pred.label, pred.decision_value);
        } else {
            println!("{} {}", i, pred.label);
        }
    }

    Ok(())
}

fn evaluate_command(args: EvaluateArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let model = TrainedModel::load_from_file(&args.model)?;

    info!("Loading test data from: {:?}", args.data);
    let dataset = DenseDataset::from_file(&args.data)?;

    let accuracy = model.evaluate(dataset.examples())?;

    println!("=== Model Evaluation ===");
    println!("Model: {:?}", args.model);
    println!("Test instances: {}", dataset.len());
    println!("Accuracy: {:.2}%", accuracy * 100.0);

    if args.detailed {
        let metrics = model.evaluate_detailed(dataset.examples())?;
        println!("\nDetailed Metrics:");
        println!("  True Positives:  {}", metrics.true_positives);
        println!("  True Negatives:  {}", metrics.true_negatives);
        println!("  False Positives: {}", metrics.false_positives);
        println!("  False Negatives: {}", metrics.false_negatives);
        println!("  Precision:       {:.4}", metrics.precision());
        println!("  Recall:          {:.4}", metrics.recall());
        println!("  F1 Score:        {:.4}", metrics.f1_score());
        println!("  Specificity:     {:.4}", metrics.specificity());
    }

    Ok(())
}

fn average_command(args: AverageArgs) -> Result<()> {
    info!("Averaging {} models", args.models.len());

    let mut models = Vec::with_capacity(args.models.len());
    for path in &args.models {
        info!("Loading model from: {path:?}");
        let weights = linear_svm::persistence::load_weights(path)?;
        models.push(Classifier::from_vector(weights));
    }

    let averaged = Classifier::from_average(&models)?;
    linear_svm::persistence::save_weights(averaged.weights(), &args.output)?;

    info!("Averaged model saved to: {:?}", args.output);
    println!(
        "Averaged {} models ({} dimensions) into {:?}",
        models.len(),
        averaged.dimension(),
        args.output
    );

    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    info!("Loading model from: {:?}", args.model);
    let weights = linear_svm::persistence::load_weights(&args.model)?;

    println!("=== Model Summary ===");
    println!("Dimensions: {}", weights.dim());
    println!("Weight norm: {:.6}", weights.norm());

    let coords = weights.as_slice();
    let n_show = coords.len().min(10);
    println!("First {n_show} weights:");
    for (i, w) in coords.iter().enumerate().take(n_show) {
        println!("  w{i}: {w:.6}");
    }
    if coords.len() > n_show {
        println!("  ... ({} more)", coords.len() - n_show);
    }

    Ok(())
}
