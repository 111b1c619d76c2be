//! Bloom CLI - command-line interface for mood-bloom
//!
//! Commands:
//! - analyze: classify text and print the parameter bundle
//! - serve: run the HTTP API
//! - example: print the fixed example request/response pair

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use mood_bloom::engine::Modulation;
use mood_bloom::server;
use mood_bloom::{BloomError, MoodEngine, BLOOM_VERSION};

/// Bloom - deterministic mood-to-flower parameter engine
#[derive(Parser)]
#[command(name = "bloom")]
#[command(author = "Bloom Labs")]
#[command(version = BLOOM_VERSION)]
#[command(about = "Map text mood to generative flower-art parameters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify text and print the parameter bundle
    Analyze {
        /// Text to classify
        text: String,

        /// Consecutive good-mood days
        #[arg(long, default_value_t = 0)]
        streak_days: u32,

        /// Community mood score (0-1)
        #[arg(long, default_value_t = 0.5)]
        community_mood: f64,

        /// Trading activity score (0-1)
        #[arg(long, default_value_t = 0.5)]
        trading_activity: f64,

        /// Print the 7-field summary instead of the full bundle
        #[arg(long)]
        simple: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Run the HTTP API
    Serve {
        /// Bind address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Bind port
        #[arg(long, default_value_t = 5001)]
        port: u16,
    },

    /// Print the fixed example request/response pair
    Example,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), BloomCliError> {
    let engine = Arc::new(MoodEngine::new());

    match cli.command {
        Commands::Analyze {
            text,
            streak_days,
            community_mood,
            trading_activity,
            simple,
            pretty,
        } => {
            let output = if simple {
                let params = engine.analyze_simple(&text)?;
                to_json(&params, pretty)?
            } else {
                let modulation = Modulation {
                    streak_days,
                    community_mood,
                    trading_activity,
                };
                let bundle = engine.analyze(&text, modulation)?;
                to_json(&bundle, pretty)?
            };

            println!("{output}");
            Ok(())
        }

        Commands::Serve { host, port } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(engine, &host, port))?;
            Ok(())
        }

        Commands::Example => {
            let request = server::example_request();
            let modulation = Modulation {
                streak_days: request.streak_days,
                community_mood: request.community_mood,
                trading_activity: request.trading_activity,
            };
            let response = engine.analyze(&request.text, modulation)?;

            let pair = serde_json::json!({
                "example_request": request,
                "example_response": response,
            });
            println!("{}", serde_json::to_string_pretty(&pair)?);
            Ok(())
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, BloomCliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

// Error types

#[derive(Debug)]
enum BloomCliError {
    Io(std::io::Error),
    Engine(BloomError),
    Json(serde_json::Error),
}

impl From<std::io::Error> for BloomCliError {
    fn from(e: std::io::Error) -> Self {
        BloomCliError::Io(e)
    }
}

impl From<BloomError> for BloomCliError {
    fn from(e: BloomError) -> Self {
        BloomCliError::Engine(e)
    }
}

impl From<serde_json::Error> for BloomCliError {
    fn from(e: serde_json::Error) -> Self {
        BloomCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<BloomCliError> for CliError {
    fn from(e: BloomCliError) -> Self {
        match e {
            BloomCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check the bind address and port".to_string()),
            },
            BloomCliError::Engine(e) => {
                let code = match e {
                    BloomError::InvalidInput => "INVALID_INPUT",
                    BloomError::Classification(_) => "CLASSIFICATION_FAILED",
                    BloomError::Precondition(_) => "PRECONDITION_FAILED",
                    BloomError::Json(_) => "JSON_ERROR",
                };
                let hint = match e {
                    BloomError::InvalidInput => {
                        Some("Provide non-empty text to analyze".to_string())
                    }
                    _ => None,
                };
                CliError {
                    code: code.to_string(),
                    message: e.to_string(),
                    hint,
                }
            }
            BloomCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
        }
    }
}
