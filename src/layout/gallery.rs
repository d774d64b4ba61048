//! Gallery layout: the featured card and the thumbnail grid.

use serde::{Deserialize, Serialize};

use super::geometry::{ScreenRect, WindowSize};

/// Row and column of a thumbnail, both zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

/// Where revealed cards are drawn.
///
/// The newest card is drawn at its native size with its top-left corner at
/// `featured_origin`. Every revealed card,
/// newest included, also appears as a thumbnail in a row-major grid starting
/// at `grid_origin`, wrapping after `columns` items.
///
/// ```
/// use monster_bingo::layout::{GalleryLayout, GridCell};
///
/// let layout = GalleryLayout::default();
/// assert_eq!(layout.grid_cell(7), GridCell { row: 1, column: 2 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryLayout {
    /// Top-left corner of the featured card.
    pub featured_origin: (f32, f32),
    /// Top-left corner of the first thumbnail.
    pub grid_origin: (f32, f32),
    /// Edge length of a thumbnail.
    pub thumbnail_size: f32,
    /// Thumbnails per row.
    pub columns: usize,
}

impl Default for GalleryLayout {
    fn default() -> Self {
        Self {
            featured_origin: (200.0, 200.0),
            grid_origin: (830.0, 50.0),
            thumbnail_size: 64.0,
            columns: 5,
        }
    }
}

impl GalleryLayout {
    /// Set thumbnails per row (at least 1).
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Set the thumbnail edge length.
    #[must_use]
    pub fn with_thumbnail_size(mut self, size: f32) -> Self {
        self.thumbnail_size = size;
        self
    }

    /// Set the featured card's top-left corner.
    #[must_use]
    pub fn with_featured(mut self, x: f32, y: f32) -> Self {
        self.featured_origin = (x, y);
        self
    }

    /// Grid cell of the `index`-th revealed card.
    #[must_use]
    pub fn grid_cell(&self, index: usize) -> GridCell {
        let columns = self.columns.max(1);
        GridCell {
            row: index / columns,
            column: index % columns,
        }
    }

    /// Screen rectangle of the `index`-th thumbnail.
    #[must_use]
    pub fn thumbnail_rect(&self, index: usize) -> ScreenRect {
        let cell = self.grid_cell(index);
        let (x0, y0) = self.grid_origin;
        ScreenRect::square(
            x0 + cell.column as f32 * self.thumbnail_size,
            y0 + cell.row as f32 * self.thumbnail_size,
            self.thumbnail_size,
        )
    }

    /// World position of the featured card's top-left corner, for a
    /// top-left anchored sprite.
    #[must_use]
    pub fn featured_world_origin(&self, window: WindowSize) -> (f32, f32) {
        let (x, y) = self.featured_origin;
        window.to_world(x, y)
    }

    /// Rectangles for the first `count` thumbnails.
    pub fn thumbnail_rects(&self, count: usize) -> impl Iterator<Item = ScreenRect> + '_ {
        (0..count).map(move |index| self.thumbnail_rect(index))
    }
}
