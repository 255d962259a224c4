//! Speech provider implementations

pub mod whisper;
