//! Captured audio attempt

use serde::{Deserialize, Serialize};

/// Format of the audio data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// WAV format (what the server-side recorder produces)
    Wav,
    /// MP3 format
    Mp3,
    /// OGG container
    Ogg,
    /// Bare Opus stream
    Opus,
    /// WebM container (browser `MediaRecorder` default)
    Webm,
    /// FLAC format
    Flac,
    /// M4A/AAC format
    M4a,
}

impl AudioFormat {
    /// Get the MIME type for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Opus => "audio/opus",
            Self::Webm => "audio/webm",
            Self::Flac => "audio/flac",
            Self::M4a => "audio/m4a",
        }
    }

    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Opus => "opus",
            Self::Webm => "webm",
            Self::Flac => "flac",
            Self::M4a => "m4a",
        }
    }

    /// Parse from MIME type, ignoring parameters such as `codecs=opus`
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let base = mime.split(';').next().unwrap_or(mime).trim();
        match base.to_ascii_lowercase().as_str() {
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/ogg" => Some(Self::Ogg),
            "audio/opus" => Some(Self::Opus),
            "audio/webm" | "video/webm" => Some(Self::Webm),
            "audio/flac" | "audio/x-flac" => Some(Self::Flac),
            "audio/m4a" | "audio/mp4" | "audio/x-m4a" => Some(Self::M4a),
            _ => None,
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// A recorded pronunciation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    data: Vec<u8>,
    format: AudioFormat,
    duration_ms: Option<u64>,
}

impl AudioClip {
    /// Wrap already-encoded audio bytes
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self {
            data,
            format,
            duration_ms: None,
        }
    }

    /// Attach a known duration
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Encoded audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the encoded bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Duration in milliseconds, if known
    #[must_use]
    pub const fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }

    /// Size of the encoded data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the clip carries no data at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
