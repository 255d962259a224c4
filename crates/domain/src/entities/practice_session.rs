//! Practice session entity and its state machine
//!
//! A session walks through `Idle → SoundSelected → Recorded → Scored →
//! RemedyProvided`. Selecting a sound is allowed from any stage and simply
//! overwrites the active context; there is no explicit end transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::ScoreResult;
use crate::errors::DomainError;
use crate::value_objects::{SessionId, Sound};

/// Stage of a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeStage {
    /// No sound has been selected yet
    Idle,
    /// A sound is active and waiting for an attempt
    SoundSelected,
    /// An attempt was accepted and is being transcribed
    Recorded,
    /// The last attempt has been scored
    Scored,
    /// Remedy guidance was requested for the active sound
    RemedyProvided,
}

impl PracticeStage {
    /// Stable snake_case name used in logs and errors
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::SoundSelected => "sound_selected",
            Self::Recorded => "recorded",
            Self::Scored => "scored",
            Self::RemedyProvided => "remedy_provided",
        }
    }

    /// Stages from which a new attempt may be submitted
    #[must_use]
    pub const fn accepts_recording(&self) -> bool {
        matches!(
            self,
            Self::SoundSelected | Self::Scored | Self::RemedyProvided
        )
    }
}

impl fmt::Display for PracticeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sound currently being practiced and the word it is scored against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeContext {
    /// Active sound
    pub sound: Sound,
    /// Example word as stored in the catalog
    pub example_word: String,
}

impl PracticeContext {
    /// Create a new practice context
    pub fn new(sound: Sound, example_word: impl Into<String>) -> Self {
        Self {
            sound,
            example_word: example_word.into(),
        }
    }

    /// Uppercase target word passed to the scorer
    #[must_use]
    pub fn scoring_word(&self) -> String {
        self.example_word.to_uppercase()
    }
}

/// One learner's practice interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    id: SessionId,
    stage: PracticeStage,
    context: Option<PracticeContext>,
    last_score: Option<ScoreResult>,
    selection: u64,
}

impl PracticeSession {
    /// Create an idle session
    #[must_use]
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            stage: PracticeStage::Idle,
            context: None,
            last_score: None,
            selection: 0,
        }
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Current stage
    #[must_use]
    pub const fn stage(&self) -> PracticeStage {
        self.stage
    }

    /// Active practice context, if a sound was selected
    #[must_use]
    pub const fn context(&self) -> Option<&PracticeContext> {
        self.context.as_ref()
    }

    /// Active sound, if any
    #[must_use]
    pub fn active_sound(&self) -> Option<&Sound> {
        self.context.as_ref().map(|c| &c.sound)
    }

    /// Result of the most recent scored attempt for the active sound
    #[must_use]
    pub const fn last_score(&self) -> Option<&ScoreResult> {
        self.last_score.as_ref()
    }

    /// Number of selections made in this session
    ///
    /// Bumped by every [`Self::select`], including re-selecting the same
    /// sound. An attempt started under one selection must not be applied to
    /// a session whose selection has since changed.
    #[must_use]
    pub const fn selection(&self) -> u64 {
        self.selection
    }

    /// Select a sound, overwriting any previous context
    pub fn select(&mut self, context: PracticeContext) {
        self.context = Some(context);
        self.last_score = None;
        self.stage = PracticeStage::SoundSelected;
        self.selection += 1;
    }

    /// Accept an attempt for the active sound
    ///
    /// # Errors
    ///
    /// `NoActiveSound` if nothing was selected, `InvalidTransition` if an
    /// attempt is already being processed.
    pub fn accept_recording(&mut self) -> Result<&PracticeContext, DomainError> {
        if self.context.is_none() {
            return Err(DomainError::NoActiveSound);
        }
        if !self.stage.accepts_recording() {
            return Err(DomainError::invalid_transition(
                self.stage.as_str(),
                "accept a recording",
            ));
        }

        self.stage = PracticeStage::Recorded;
        self.context.as_ref().ok_or(DomainError::NoActiveSound)
    }

    /// Store the score of the accepted attempt
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless the session is in `Recorded`.
    pub fn complete_scoring(&mut self, result: ScoreResult) -> Result<(), DomainError> {
        if self.stage != PracticeStage::Recorded {
            return Err(DomainError::invalid_transition(
                self.stage.as_str(),
                "complete scoring",
            ));
        }

        self.last_score = Some(result);
        self.stage = PracticeStage::Scored;
        Ok(())
    }

    /// Mark that remedy guidance was requested for the active sound
    ///
    /// # Errors
    ///
    /// `NoActiveSound` if nothing was selected.
    pub fn provide_remedy(&mut self) -> Result<&PracticeContext, DomainError> {
        if self.context.is_none() {
            return Err(DomainError::NoActiveSound);
        }

        self.stage = PracticeStage::RemedyProvided;
        self.context.as_ref().ok_or(DomainError::NoActiveSound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Accuracy;

    fn context(sound: &str, word: &str) -> PracticeContext {
        PracticeContext::new(Sound::parse(sound).unwrap(), word)
    }

    #[test]
    fn new_session_is_idle() {
        let session = PracticeSession::new(SessionId::new());
        assert_eq!(session.stage(), PracticeStage::Idle);
        assert!(session.context().is_none());
        assert!(session.last_score().is_none());
    }

    #[test]
    fn select_moves_to_sound_selected() {
        let mut session = PracticeSession::new(SessionId::new());
        session.select(context("S", "sunday"));

        assert_eq!(session.stage(), PracticeStage::SoundSelected);
        assert_eq!(session.active_sound().unwrap().as_str(), "S");
    }

    #[test]
    fn full_flow_reaches_remedy_provided() {
        let mut session = PracticeSession::new(SessionId::new());
        session.select(context("S", "sunday"));

        let ctx = session.accept_recording().unwrap();
        assert_eq!(ctx.scoring_word(), "SUNDAY");
        assert_eq!(session.stage(), PracticeStage::Recorded);

        session
            .complete_scoring(ScoreResult::new("SHUNDAY", Accuracy::Substituted))
            .unwrap();
        assert_eq!(session.stage(), PracticeStage::Scored);
        assert_eq!(session.last_score().unwrap().percentage(), 20);

        session.provide_remedy().unwrap();
        assert_eq!(session.stage(), PracticeStage::RemedyProvided);
    }

    #[test]
    fn accept_recording_without_sound_fails() {
        let mut session = PracticeSession::new(SessionId::new());
        assert_eq!(
            session.accept_recording().unwrap_err(),
            DomainError::NoActiveSound
        );
        assert_eq!(session.stage(), PracticeStage::Idle);
    }

    #[test]
    fn accept_recording_twice_without_scoring_fails() {
        let mut session = PracticeSession::new(SessionId::new());
        session.select(context("F", "free"));
        session.accept_recording().unwrap();

        let err = session.accept_recording().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
    }

    #[test]
    fn complete_scoring_requires_recorded_stage() {
        let mut session = PracticeSession::new(SessionId::new());
        session.select(context("F", "free"));

        let err = session
            .complete_scoring(ScoreResult::new("FREE", Accuracy::Correct))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(session.stage(), PracticeStage::SoundSelected);
    }

    #[test]
    fn repeat_attempts_are_allowed_after_scoring() {
        let mut session = PracticeSession::new(SessionId::new());
        session.select(context("L", "love"));
        session.accept_recording().unwrap();
        session
            .complete_scoring(ScoreResult::new("ROVE", Accuracy::Substituted))
            .unwrap();

        assert!(session.accept_recording().is_ok());
    }

    #[test]
    fn remedy_without_sound_fails() {
        let mut session = PracticeSession::new(SessionId::new());
        assert_eq!(
            session.provide_remedy().unwrap_err(),
            DomainError::NoActiveSound
        );
    }

    #[test]
    fn reselecting_overwrites_context_and_clears_score() {
        let mut session = PracticeSession::new(SessionId::new());
        session.select(context("S", "sunday"));
        session.accept_recording().unwrap();
        session
            .complete_scoring(ScoreResult::new("SUNDAY", Accuracy::Correct))
            .unwrap();

        session.select(context("Z", "zebra"));

        assert_eq!(session.stage(), PracticeStage::SoundSelected);
        assert_eq!(session.active_sound().unwrap().as_str(), "Z");
        assert!(session.last_score().is_none());
    }

    #[test]
    fn every_selection_bumps_the_counter() {
        let mut session = PracticeSession::new(SessionId::new());
        assert_eq!(session.selection(), 0);

        session.select(context("S", "sunday"));
        session.accept_recording().unwrap();
        assert_eq!(session.selection(), 1);

        session.select(context("S", "sunday"));
        assert_eq!(session.selection(), 2);
    }

    #[test]
    fn stage_names_are_snake_case() {
        assert_eq!(PracticeStage::SoundSelected.to_string(), "sound_selected");
        let json = serde_json::to_string(&PracticeStage::RemedyProvided).unwrap();
        assert_eq!(json, "\"remedy_provided\"");
    }
}
