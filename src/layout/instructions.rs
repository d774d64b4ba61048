//! Instruction text shown before the first reveal.

use serde::{Deserialize, Serialize};

/// 8-bit RGB text colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TextColor {
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One line of static text, positioned by its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBlock {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub color: TextColor,
}

const TITLE: f32 = 100.0;
const BODY: f32 = 50.0;
const CREDIT: f32 = 16.0;

const BLOCKS: [TextBlock; 7] = [
    block("Hello", 300.0, 300.0, TITLE, TextColor::RED),
    block("Monsters!", 230.0, 400.0, TITLE, TextColor::RED),
    block("For next monster", 850.0, 150.0, BODY, TextColor::YELLOW),
    block("press space", 850.0, 220.0, BODY, TextColor::YELLOW),
    block("For new game", 850.0, 360.0, BODY, TextColor::YELLOW),
    block("press n", 850.0, 430.0, BODY, TextColor::YELLOW),
    block("F Milburn  Halloween 2020", 980.0, 750.0, CREDIT, TextColor::YELLOW),
];

const fn block(text: &'static str, x: f32, y: f32, font_size: f32, color: TextColor) -> TextBlock {
    TextBlock {
        text,
        x,
        y,
        font_size,
        color,
    }
}

/// The instruction screen, in drawing order.
#[must_use]
pub fn instruction_blocks() -> &'static [TextBlock] {
    &BLOCKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_every_key() {
        let text: Vec<_> = instruction_blocks().iter().map(|b| b.text).collect();
        assert!(text.contains(&"press space"));
        assert!(text.contains(&"press n"));
    }

    #[test]
    fn test_blocks_inside_default_window() {
        for block in instruction_blocks() {
            assert!(block.x >= 0.0 && block.x < 1200.0, "{}", block.text);
            assert!(block.y >= 0.0 && block.y < 800.0, "{}", block.text);
        }
    }

    #[test]
    fn test_title_is_red_and_large() {
        let title = &instruction_blocks()[0];
        assert_eq!(title.text, "Hello");
        assert_eq!(title.color, TextColor::RED);
        assert_eq!(title.font_size, 100.0);
    }
}
