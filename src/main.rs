//! Match Outcome Prediction CLI
//!
//! Serves win/draw/loss predictions from pre-trained artifacts.

use clap::{Parser, Subcommand};
use kickoff::{Config, Result};

#[derive(Parser)]
#[command(name = "kickoff")]
#[command(about = "Football match outcome prediction from pre-trained artifacts", long_about = None)]
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
    /// List the teams available in the catalog
    Teams,
    /// Predict a match outcome
    Predict {
        /// Home team name
        home: String,
        /// Away team name
        away: String,
        /// Match date (YYYY-MM-DD), defaults to the configured placeholder
        #[arg(long)]
        date: Option<String>,
        /// Kickoff time (HH:MM), defaults to the configured placeholder
        #[arg(long)]
        time: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Artifact management commands
    Artifacts {
        #[command(subcommand)]
        action: ArtifactCommands,
    },
    /// Initialize a new project with default config
    Init,
}

#[derive(Subcommand)]
enum ArtifactCommands {
    /// Show artifact status
    Status,
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
        Commands::Teams => commands::teams(&config),
        Commands::Predict {
            home,
            away,
            date,
            time,
            format,
        } => commands::predict(&config, &home, &away, date, time, format),
        Commands::Artifacts { action } => match action {
            ArtifactCommands::Status => commands::artifacts_status(&config),
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
    use chrono::{NaiveDate, NaiveTime};
    use kickoff::artifacts::ArtifactSet;
    use kickoff::predict::format_prediction;
    use kickoff::{features, predict, MatchQuery, PredictError};

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all("artifacts")?;
        println!("Created artifacts/ directory");

        println!("\nNext steps:");
        println!("  1. Edit {} to point at your artifact files", config_path);
        println!("  2. Copy the trained model, team catalog, and form table into artifacts/");
        println!("  3. Run 'kickoff teams' to list the catalog");
        println!("  4. Run 'kickoff predict \"Arsenal\" \"Chelsea\"' to make a prediction");

        Ok(())
    }

    pub fn teams(config: &Config) -> Result<()> {
        let artifacts = ArtifactSet::load(&config.artifacts)?;

        println!("Teams ({})", artifacts.catalog.len());
        println!("───────────────────────────────");
        for name in artifacts.catalog.names() {
            println!("  {}", name);
        }

        Ok(())
    }

    pub fn predict(
        config: &Config,
        home: &str,
        away: &str,
        date: Option<String>,
        time: Option<String>,
        format: OutputFormat,
    ) -> Result<()> {
        if home == away {
            return Err(PredictError::SameTeam(home.to_string()));
        }

        let date = match date {
            Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .map_err(|e| PredictError::Parse(format!("invalid date {}: {}", d, e)))?,
            None => config.defaults.match_date,
        };
        let kickoff = match time {
            Some(t) => NaiveTime::parse_from_str(&t, "%H:%M")
                .map_err(|e| PredictError::Parse(format!("invalid time {}: {}", t, e)))?,
            None => config.defaults.kickoff_time,
        };

        let mut artifacts = ArtifactSet::load(&config.artifacts)?;

        let query = MatchQuery {
            home_team: home.to_string(),
            away_team: away.to_string(),
            date,
            kickoff,
        };
        let features = features::assemble(&query, &artifacts.catalog, &artifacts.form)?;
        log::debug!(
            "Assembled {} features for {} vs {}",
            features.len(),
            home,
            away
        );

        let result = predict::predict(&mut artifacts.model, &features, home, away)?;

        match format {
            OutputFormat::Table => {
                print!("{}", format_prediction(&result));
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "home": result.home_team,
                    "away": result.away_team,
                    "p_away": result.probabilities.away,
                    "p_draw": result.probabilities.draw,
                    "p_home": result.probabilities.home,
                    "headline": result.headline(),
                    "confidence": result.confidence(),
                });
                println!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
            OutputFormat::Csv => {
                println!("home,away,p_away,p_draw,p_home,headline");
                println!(
                    "{},{},{:.3},{:.3},{:.3},{}",
                    result.home_team,
                    result.away_team,
                    result.probabilities.away,
                    result.probabilities.draw,
                    result.probabilities.home,
                    result.headline()
                );
            }
        }

        Ok(())
    }

    pub fn artifacts_status(config: &Config) -> Result<()> {
        let artifacts = ArtifactSet::load(&config.artifacts)?;

        println!("Artifact Status");
        println!("───────────────────────────────");
        println!("  Model:    {}", artifacts.model.path());
        println!(
            "  Catalog:  {} ({} teams)",
            config.artifacts.catalog_path,
            artifacts.catalog.len()
        );
        println!(
            "  Form:     {} ({} columns)",
            config.artifacts.form_path,
            artifacts.form.width()
        );
        println!("  Columns:  {}", artifacts.form.columns().join(", "));

        Ok(())
    }
}
