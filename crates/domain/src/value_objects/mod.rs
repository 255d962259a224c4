//! Value Objects - Immutable, identity-less domain primitives

mod session_id;
mod sound;

pub use session_id::SessionId;
pub use sound::Sound;
