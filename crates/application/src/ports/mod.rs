//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod audio_capture_port;
mod session_store;
mod transcription_port;

#[cfg(test)]
pub use audio_capture_port::MockAudioCapturePort;
pub use audio_capture_port::AudioCapturePort;
#[cfg(test)]
pub use session_store::MockPracticeSessionStore;
pub use session_store::PracticeSessionStore;
#[cfg(test)]
pub use transcription_port::MockTranscriptionPort;
pub use transcription_port::TranscriptionPort;
