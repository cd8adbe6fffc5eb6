//! IPL Player Performance CLI
//!
//! Batter summaries, expected-runs predictions and match performance labels.

use clap::{Parser, Subcommand};
use cricket::{Config, Result};

#[derive(Parser)]
#[command(name = "cricket")]
#[command(about = "IPL batter statistics and runs prediction", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Data management commands
    Data {
        #[command(subcommand)]
        action: DataCommands,
    },
    /// List batters in the dataset
    Players,
    /// List venues in the dataset
    Venues,
    /// Show a batter's summary, recent form and season totals
    Report {
        /// Batter name as it appears in the dataset
        player: String,
        /// Venue for the venue average
        #[arg(long)]
        venue: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Predict expected runs for a batter at a venue
    Predict {
        /// Batter name
        player: String,
        /// Venue name
        venue: String,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Label a single match performance
    Classify {
        /// Runs scored
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=200))]
        runs: u32,
        /// Balls faced
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u32).range(0..=150))]
        balls: u32,
        /// Number of fours
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u32).range(0..=50))]
        fours: u32,
        /// Number of sixes
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u32).range(0..=30))]
        sixes: u32,
        /// Strike rate
        #[arg(long, value_parser = parse_strike_rate)]
        strike_rate: f32,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Model management commands
    Model {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// Initialize a new project with default config
    Init,
}

#[derive(Subcommand)]
enum DataCommands {
    /// Show dataset status
    Status,
}

#[derive(Subcommand)]
enum ModelCommands {
    /// Show model information
    Info,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

fn parse_strike_rate(s: &str) -> std::result::Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("Invalid strike rate: {}", s))?;
    if !(0.0..=300.0).contains(&value) {
        return Err(format!("Strike rate must be between 0 and 300, got {}", value));
    }
    Ok(value)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Data { action } => match action {
            DataCommands::Status => commands::data_status(&config),
        },
        Commands::Players => commands::players(&config),
        Commands::Venues => commands::venues(&config),
        Commands::Report {
            player,
            venue,
            format,
        } => commands::report(&config, &player, venue.as_deref(), format),
        Commands::Predict {
            player,
            venue,
            format,
        } => commands::predict(&config, &player, &venue, format),
        Commands::Classify {
            runs,
            balls,
            fours,
            sixes,
            strike_rate,
            format,
        } => commands::classify(
            cricket::classify::MatchStatsInput {
                runs,
                balls,
                fours,
                sixes,
                strike_rate,
            },
            format,
        ),
        Commands::Model { action } => match action {
            ModelCommands::Info => commands::model_info(&config),
        },
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use cricket::classify::{MatchStatsInput, ThresholdClassifier};
    use cricket::data::Dataset;
    use cricket::features::FeatureVector;
    use cricket::predict::inference::{format_prediction, format_report};
    use cricket::predict::Predictor;
    use cricket::{CricketError, ModelKind};

    fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value)
            .map_err(|e| CricketError::Parse(format!("Failed to serialize output: {}", e)))
    }

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all("data")?;
        std::fs::create_dir_all("models")?;
        println!("Created data/ and models/ directories");

        println!("\nNext steps:");
        println!("  1. Edit {} to point at the cleaned ball-by-ball CSV", config_path);
        println!("  2. Export the trained regressor to {}.mpk", config.model.path);
        println!("  3. Run 'cricket report \"V Kohli\"' to see a batter summary");
        println!("  4. Run 'cricket predict \"V Kohli\" \"Eden Gardens\"' to predict runs");

        Ok(())
    }

    pub fn data_status(config: &Config) -> Result<()> {
        let dataset = Dataset::open(&config.data.dataset_path)?;
        let stats = dataset.stats();

        println!("Dataset Status");
        println!("───────────────────────────────");
        println!("  Path:     {}", config.data.dataset_path);
        println!("  Balls:    {}", stats.record_count);
        println!("  Batters:  {}", stats.batter_count);
        println!("  Venues:   {}", stats.venue_count);
        println!("  Seasons:  {}", stats.season_count);

        Ok(())
    }

    pub fn players(config: &Config) -> Result<()> {
        let dataset = Dataset::open(&config.data.dataset_path)?;
        for player in dataset.players() {
            println!("{}", player);
        }
        Ok(())
    }

    pub fn venues(config: &Config) -> Result<()> {
        let dataset = Dataset::open(&config.data.dataset_path)?;
        for venue in dataset.venues() {
            println!("{}", venue);
        }
        Ok(())
    }

    pub fn report(
        config: &Config,
        player: &str,
        venue: Option<&str>,
        format: OutputFormat,
    ) -> Result<()> {
        let dataset = Dataset::open(&config.data.dataset_path)?;
        let report = dataset.report(player, venue);

        match format {
            OutputFormat::Table => print!("{}", format_report(&report)),
            OutputFormat::Json => println!("{}", to_json(&report)?),
            OutputFormat::Csv => {
                println!("player,total_runs,balls,matches,average,strike_rate,venue_average");
                println!(
                    "{},{},{},{},{:.2},{:.2},{}",
                    report.batter,
                    report.summary.total_runs,
                    report.summary.balls,
                    report.summary.matches,
                    report.summary.average,
                    report.summary.strike_rate,
                    report
                        .venue_average
                        .map(|v| format!("{:.2}", v))
                        .unwrap_or_default()
                );
            }
        }

        Ok(())
    }

    pub fn predict(config: &Config, player: &str, venue: &str, format: OutputFormat) -> Result<()> {
        let predictor = Predictor::load(config)?;
        let prediction = predictor.predict(player, venue)?;

        match format {
            OutputFormat::Table => {
                print!("{}", format_prediction(&prediction));
                for (name, value) in prediction.features.named_slots() {
                    log::debug!("  {:<20} {:.3}", name, value);
                }
            }
            OutputFormat::Json => println!("{}", to_json(&prediction)?),
            OutputFormat::Csv => {
                println!("player,venue,expected_runs,raw");
                println!(
                    "{},{},{},{:.3}",
                    prediction.batter, prediction.venue, prediction.expected_runs, prediction.raw
                );
            }
        }

        Ok(())
    }

    pub fn classify(input: MatchStatsInput, format: OutputFormat) -> Result<()> {
        let label = ThresholdClassifier::new().classify(&input);

        match format {
            OutputFormat::Table => {
                println!("Prediction Result");
                println!("───────────────────────────────");
                println!("  {}", label);
                println!();
                for (metric, value) in input.metrics() {
                    println!("  {:<12} {:>7.1}", metric, value);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "input": input,
                    "label": label,
                });
                println!("{}", to_json(&json)?);
            }
            OutputFormat::Csv => {
                println!("runs,balls,fours,sixes,strike_rate,label");
                println!(
                    "{},{},{},{},{:.1},{:?}",
                    input.runs, input.balls, input.fours, input.sixes, input.strike_rate, label
                );
            }
        }

        Ok(())
    }

    pub fn model_info(config: &Config) -> Result<()> {
        let extension = match config.model.kind {
            ModelKind::Mlp => "mpk",
            ModelKind::Linear => "json",
        };
        let model_file = format!("{}.{}", config.model.path, extension);
        if !std::path::Path::new(&model_file).exists() {
            return Err(CricketError::NoModel(model_file));
        }

        let model = cricket::model::load_model(&config.model)?;

        println!("Model Information");
        println!("───────────────────────────────");
        println!("  Kind:           {}", config.model.kind);
        println!("  Path:           {}", model_file);
        println!("  Input dim:      {}", model.input_dim());
        println!("  Expected dim:   {}", FeatureVector::DIM);
        if config.model.kind == ModelKind::Mlp {
            println!("  Hidden layers:  {:?}", config.model.hidden_dims);
        }

        Ok(())
    }
}
