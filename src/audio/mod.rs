//! Audio cue resolution.
//!
//! ## Key Types
//!
//! - `SoundCue`: The eight monster sound categories (`card id mod 8`)
//! - `resolve`: Raw card number to cue, validating the number
//! - `CueTable`: One preloaded handle per cue, looked up without I/O
//! - `CueQueue`: Cues waiting for the frontend to play them

pub mod cue;
pub mod queue;
pub mod table;

pub use cue::{resolve, SoundCue};
pub use queue::CueQueue;
pub use table::CueTable;
