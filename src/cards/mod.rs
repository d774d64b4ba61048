//! Card system: identifiers and the asset manifest.
//!
//! ## Key Types
//!
//! - `CardId`: Validated monster number in `1..=DECK_SIZE`
//! - `AssetManifest`: File names for cards, sounds and shared assets

pub mod definition;
pub mod manifest;

pub use definition::{CardId, DECK_SIZE};
pub use manifest::AssetManifest;
