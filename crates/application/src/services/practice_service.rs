//! Practice service - Orchestrates a pronunciation practice session
//!
//! The flow for one caller:
//! 1. Select a sound and receive its example word
//! 2. Submit (or record on the server) an attempt
//! 3. Transcribe and score the attempt against the example word
//! 4. Ask for remedy guidance when the averaged score is low

use std::{fmt, sync::Arc, time::Duration};

use domain::{
    AudioClip, DomainError, ExampleRecord, PracticeContext, PracticeSession, ScoreResult,
    SessionId, Sound, needs_remedy, score_attempt,
};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::{
    catalog::{RemedyCatalog, SoundCatalog},
    error::ApplicationError,
    ports::{AudioCapturePort, PracticeSessionStore, TranscriptionPort},
};

/// Configuration for practice sessions
#[derive(Debug, Clone)]
pub struct PracticeConfig {
    /// How long a server-side recording lasts
    pub capture_duration: Duration,
    /// Language hint for transcription (e.g., "en")
    pub language_hint: Option<String>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            capture_duration: Duration::from_secs(5),
            language_hint: Some("en".to_string()),
        }
    }
}

/// Service driving practice sessions from selection to remedy
pub struct PracticeService {
    sounds: Arc<SoundCatalog>,
    remedies: Arc<RemedyCatalog>,
    transcription: Arc<dyn TranscriptionPort>,
    capture: Arc<dyn AudioCapturePort>,
    sessions: Arc<dyn PracticeSessionStore>,
    config: PracticeConfig,
    /// Serializes load-modify-save on the session store; never held across
    /// transcription or capture
    commit: Mutex<()>,
}

impl fmt::Debug for PracticeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeService")
            .field("sounds", &self.sounds.len())
            .field("remedies", &self.remedies.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PracticeService {
    /// Create a new practice service with default configuration
    pub fn new(
        sounds: Arc<SoundCatalog>,
        remedies: Arc<RemedyCatalog>,
        transcription: Arc<dyn TranscriptionPort>,
        capture: Arc<dyn AudioCapturePort>,
        sessions: Arc<dyn PracticeSessionStore>,
    ) -> Self {
        Self {
            sounds,
            remedies,
            transcription,
            capture,
            sessions,
            config: PracticeConfig::default(),
            commit: Mutex::new(()),
        }
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: PracticeConfig) -> Self {
        self.config = config;
        self
    }

    /// Select a sound to practice
    ///
    /// An absent or unknown session id starts a new session. The returned id
    /// must accompany every later call.
    ///
    /// # Errors
    /// `InvalidSound` for malformed codes, `UnknownSound` when the catalog has
    /// no example; the session is left unchanged in both cases.
    #[instrument(skip(self))]
    pub async fn select_sound(
        &self,
        session_id: Option<SessionId>,
        sound: &str,
    ) -> Result<(SessionId, ExampleRecord), ApplicationError> {
        let sound = Sound::parse(sound)?;
        let example = self.sounds.example_for(&sound)?;

        let _guard = self.commit.lock().await;
        let mut session = match session_id {
            Some(id) => self.sessions.load(&id).await?,
            None => None,
        }
        .unwrap_or_else(|| {
            debug!("Starting new practice session");
            PracticeSession::new(SessionId::new())
        });

        session.select(PracticeContext::new(sound, example.word.clone()));
        self.sessions.save(&session).await?;

        info!(session_id = %session.id(), sound = %example.sound, word = %example.word, "Sound selected");
        Ok((session.id(), example))
    }

    /// Transcribe and score an uploaded attempt
    ///
    /// The stored session only advances when the whole attempt succeeds and
    /// the sound it was made for is still the selected one.
    ///
    /// # Errors
    /// `NoActiveSound`, `InvalidAudio` for an empty clip, `Transcription`
    /// when the speech service fails, `InvalidTransition` when the sound was
    /// re-selected while the attempt was being transcribed.
    #[instrument(skip(self, clip), fields(
        audio_size = clip.size_bytes(),
        format = %clip.format()
    ))]
    pub async fn submit_recording(
        &self,
        session_id: Option<SessionId>,
        clip: AudioClip,
    ) -> Result<ScoreResult, ApplicationError> {
        let attempt = self.begin_attempt(session_id).await?;
        if clip.is_empty() {
            return Err(ApplicationError::InvalidAudio("audio body is empty".to_string()));
        }

        self.finish_attempt(attempt, clip).await
    }

    /// Record an attempt on the server, then score it
    ///
    /// The clip is scored against the sound that was active when recording
    /// started.
    ///
    /// # Errors
    /// `NoActiveSound` before anything is captured, `Capture` when recording
    /// fails, then as [`Self::submit_recording`].
    #[instrument(skip(self))]
    pub async fn record_attempt(
        &self,
        session_id: Option<SessionId>,
    ) -> Result<ScoreResult, ApplicationError> {
        let attempt = self.begin_attempt(session_id).await?;

        let duration = self.config.capture_duration;
        info!(duration_secs = duration.as_secs_f32(), "Recording attempt");
        let clip = self.capture.capture(duration).await.inspect_err(|e| {
            warn!(error = %e, "Capture failed");
        })?;

        self.finish_attempt(attempt, clip).await
    }

    /// Remedy guidance for the active sound
    ///
    /// `percentage` is the caller's averaged score; at or below the threshold
    /// the registered instructions are returned, otherwise an empty list.
    ///
    /// # Errors
    /// `NoActiveSound`.
    #[instrument(skip(self))]
    pub async fn get_remedy(
        &self,
        session_id: Option<SessionId>,
        percentage: u32,
    ) -> Result<Vec<String>, ApplicationError> {
        let sound = {
            let _guard = self.commit.lock().await;
            let mut session = self.active_session(session_id).await?;
            let sound = session.provide_remedy()?.sound.clone();
            self.sessions.save(&session).await?;
            sound
        };

        let remedy = if needs_remedy(percentage) {
            self.remedies.remedy_for(&sound)
        } else {
            Vec::new()
        };
        debug!(sound = %sound, steps = remedy.len(), "Remedy provided");
        Ok(remedy)
    }

    /// End a session explicitly
    #[instrument(skip(self))]
    pub async fn end_session(&self, session_id: SessionId) -> Result<(), ApplicationError> {
        let _guard = self.commit.lock().await;
        self.sessions.remove(&session_id).await
    }

    /// Load a session, if it exists
    pub async fn session(
        &self,
        session_id: SessionId,
    ) -> Result<Option<PracticeSession>, ApplicationError> {
        self.sessions.load(&session_id).await
    }

    /// All example records in the catalog
    pub fn list_sounds(&self) -> Vec<ExampleRecord> {
        self.sounds.list()
    }

    /// Whether the transcription collaborator is available
    pub async fn is_ready(&self) -> bool {
        self.transcription.is_available().await
    }

    async fn active_session(
        &self,
        session_id: Option<SessionId>,
    ) -> Result<PracticeSession, ApplicationError> {
        let Some(id) = session_id else {
            return Err(DomainError::NoActiveSound.into());
        };
        match self.sessions.load(&id).await? {
            Some(session) if session.context().is_some() => Ok(session),
            _ => Err(DomainError::NoActiveSound.into()),
        }
    }

    /// Validate that the session can take an attempt and capture what it is for
    async fn begin_attempt(
        &self,
        session_id: Option<SessionId>,
    ) -> Result<Attempt, ApplicationError> {
        let mut session = self.active_session(session_id).await?;
        let context = session.accept_recording()?.clone();
        Ok(Attempt {
            session_id: session.id(),
            selection: session.selection(),
            context,
        })
    }

    /// Transcribe the clip, score it and commit the result
    ///
    /// The session is reloaded after transcription so a selection made in
    /// the meantime is never overwritten.
    async fn finish_attempt(
        &self,
        attempt: Attempt,
        clip: AudioClip,
    ) -> Result<ScoreResult, ApplicationError> {
        let transcript = match self
            .transcription
            .transcribe(clip, self.config.language_hint.clone())
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Transcription failed");
                return Err(e);
            },
        };

        let context = &attempt.context;
        let accuracy = score_attempt(
            &context.scoring_word(),
            &transcript,
            &context.sound,
            self.sounds.substitution_for(&context.sound),
        );
        let result = ScoreResult::new(transcript, accuracy);

        let _guard = self.commit.lock().await;
        let mut session = self
            .sessions
            .load(&attempt.session_id)
            .await?
            .ok_or(DomainError::NoActiveSound)?;
        if session.selection() != attempt.selection {
            warn!(
                sound = %context.sound,
                active = ?session.active_sound().map(Sound::as_str),
                "Sound re-selected during attempt, discarding score"
            );
            return Err(DomainError::invalid_transition(
                session.stage().as_str(),
                "score an attempt made for a previous selection",
            )
            .into());
        }

        session.accept_recording()?;
        session.complete_scoring(result.clone())?;
        self.sessions.save(&session).await?;

        info!(
            sound = %context.sound,
            transcript = %result.transcript,
            percentage = result.percentage(),
            "Attempt scored"
        );
        Ok(result)
    }
}

/// An attempt in flight: the selection it was made for
#[derive(Debug)]
struct Attempt {
    session_id: SessionId,
    selection: u64,
    context: PracticeContext,
}
