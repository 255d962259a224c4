//! Domain entities - Objects with identity and lifecycle

mod audio_clip;
mod example;
mod practice_session;
mod score;

pub use audio_clip::{AudioClip, AudioFormat};
pub use example::ExampleRecord;
pub use practice_session::{PracticeContext, PracticeSession, PracticeStage};
pub use score::{Accuracy, ScoreResult};
