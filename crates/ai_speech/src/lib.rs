//! AI Speech - Speech-to-Text for pronunciation attempts
//!
//! Provides the `SpeechToText` port and a provider for OpenAI-compatible
//! Whisper endpoints (Groq by default, OpenAI or a self-hosted server by
//! configuration).
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{SpeechConfig, SpeechToText, WhisperProvider};
//! use domain::{AudioClip, AudioFormat};
//!
//! let provider = WhisperProvider::new(config)?;
//! let clip = AudioClip::new(bytes, AudioFormat::Wav);
//! let transcription = provider.transcribe(clip).await?;
//! println!("Heard: {}", transcription.text);
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::{ResponseFormat, SpeechConfig};
pub use error::SpeechError;
pub use ports::SpeechToText;
pub use providers::whisper::WhisperProvider;
pub use types::{Transcription, is_whisper_supported};
