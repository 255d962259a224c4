//! SoundCoach CLI
//!
//! Command-line interface for pronunciation practice and catalog checks.

#![allow(clippy::print_stdout)]

mod client;
mod offline;

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Parser, Subcommand};
use infrastructure::{LogFormat, init_tracing};

use crate::client::{ClientError, PracticeClient};

/// SoundCoach CLI
#[derive(Parser)]
#[command(name = "soundcoach-cli")]
#[command(author, version, about = "Pronunciation practice CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server readiness
    Status {
        /// Server URL
        #[arg(short, long, env = "SOUNDCOACH_URL", default_value = "http://localhost:5000")]
        url: String,
    },

    /// List the sounds the server can practice
    Sounds {
        /// Server URL
        #[arg(short, long, env = "SOUNDCOACH_URL", default_value = "http://localhost:5000")]
        url: String,
    },

    /// Score a transcript locally without the server
    ///
    /// Example: soundcoach-cli score S "shunday"
    Score {
        /// Sound code (e.g. S, TH, B2)
        sound: String,

        /// What the learner said
        transcript: String,

        /// Catalog TOML replacing the built-in content
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Practice a sound through the server
    ///
    /// Uploads `audio` when given, otherwise asks the server to record.
    /// Example: soundcoach-cli practice Z --audio attempt.wav
    Practice {
        /// Sound code
        sound: String,

        /// Recorded attempt to upload (format from the file extension)
        #[arg(short, long)]
        audio: Option<PathBuf>,

        /// Server URL
        #[arg(short, long, env = "SOUNDCOACH_URL", default_value = "http://localhost:5000")]
        url: String,

        /// Request timeout in seconds
        #[arg(long, default_value = "60")]
        timeout: u64,
    },

    /// Validate a catalog TOML file
    CheckCatalog {
        /// Catalog file
        path: PathBuf,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(LogFormat::Text, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Status { url } => {
            let client = PracticeClient::new(&url, Duration::from_secs(10))?;
            let (status, body) = client.ready().await?;
            println!("📊 Server status: HTTP {status}");
            println!("{}", serde_json::to_string_pretty(&body)?);
            if !status.is_success() {
                std::process::exit(1);
            }
        },

        Commands::Sounds { url } => {
            let client = PracticeClient::new(&url, Duration::from_secs(10))?;
            let body = client.sounds().await?;
            for sound in body["sounds"].as_array().into_iter().flatten() {
                println!(
                    "{:<4} {:<10} {}",
                    sound["letter"].as_str().unwrap_or_default(),
                    sound["word"].as_str().unwrap_or_default(),
                    sound["pronunciation"].as_str().unwrap_or_default(),
                );
            }
        },

        Commands::Score {
            sound,
            transcript,
            catalog,
        } => {
            let (sounds, remedies) = offline::catalogs(catalog.as_ref())?;
            let score = offline::score_transcript(&sounds, &remedies, &sound, &transcript)?;
            println!(
                "🎯 {} ({}): {}%",
                score.sound,
                score.word,
                score.accuracy.percentage()
            );
            print_remedy(&score.remedy);
        },

        Commands::Practice {
            sound,
            audio,
            url,
            timeout,
        } => {
            let mut client = PracticeClient::new(&url, Duration::from_secs(timeout))?;
            let example = client.select(&sound).await?;
            println!("🔤 Say \"{}\" [{}]", example.word, example.pronunciation);

            let result = match audio {
                Some(path) => {
                    let format = offline::format_for_path(&path).with_context(|| {
                        format!("Cannot tell audio format of {}", path.display())
                    })?;
                    let bytes = tokio::fs::read(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    client.submit(bytes, format).await
                },
                None => {
                    println!("🎙️  Recording on the server...");
                    client.record().await
                },
            };

            let score = match result {
                Ok(score) => score,
                Err(ClientError::Api { retryable: true, message, .. }) => {
                    println!("⏳ {message}; try again in a moment");
                    std::process::exit(2);
                },
                Err(e) => return Err(e.into()),
            };
            println!("📝 Heard: {}", score.transcript);
            println!("🎯 Score: {}%", score.percentage);

            let remedy = client.remedy(u32::from(score.percentage)).await?;
            print_remedy(&remedy);
        },

        Commands::CheckCatalog { path } => match offline::catalogs(Some(&path)) {
            Ok((sounds, remedies)) => {
                println!(
                    "✅ {}: {} sounds, {} remedies",
                    path.display(),
                    sounds.len(),
                    remedies.len()
                );
            },
            Err(e) => {
                println!("❌ {e}");
                std::process::exit(1);
            },
        },
    }

    Ok(())
}

fn print_remedy(remedy: &[String]) {
    if remedy.is_empty() {
        return;
    }
    println!("💡 Try this:");
    for step in remedy {
        println!("   - {step}");
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn log_filter_verbosity() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_score_command() {
        let cli = Cli::try_parse_from(["soundcoach-cli", "score", "S", "shunday"]).unwrap();
        let Commands::Score {
            sound, transcript, ..
        } = cli.command
        else {
            unreachable!("expected score command");
        };
        assert_eq!(sound, "S");
        assert_eq!(transcript, "shunday");
    }

    #[test]
    fn parses_practice_with_audio() {
        let cli = Cli::try_parse_from([
            "soundcoach-cli",
            "practice",
            "Z",
            "--audio",
            "attempt.wav",
            "--url",
            "http://pi:5000",
        ])
        .unwrap();
        let Commands::Practice { audio, url, .. } = cli.command else {
            unreachable!("expected practice command");
        };
        assert_eq!(audio, Some(PathBuf::from("attempt.wav")));
        assert_eq!(url, "http://pi:5000");
    }
}
