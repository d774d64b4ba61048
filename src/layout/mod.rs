//! Screen layout for the gallery and instruction screens.
//!
//! Pure geometry, so placement can be tested without a window.
//!
//! ## Key Types
//!
//! - `WindowSize` / `ScreenRect`: Screen-space geometry and world conversion
//! - `GalleryLayout`: Featured card and thumbnail grid
//! - `TextBlock`: Static instruction text

pub mod gallery;
pub mod geometry;
pub mod instructions;

pub use gallery::{GalleryLayout, GridCell};
pub use geometry::{ScreenRect, WindowSize};
pub use instructions::{instruction_blocks, TextBlock, TextColor};
