//! Scoreboard strip along the bottom of the window

use crate::entity::Playfield;
use crate::render::{Rgb, ScreenRect, Surface};
use crate::text::{text_height, text_width};

#[derive(Debug, Clone)]
pub struct ScoreboardStyle {
    pub background: Rgb,
    pub text_color: Rgb,
    pub scale: u32,
}

impl Default for ScoreboardStyle {
    fn default() -> Self {
        ScoreboardStyle {
            background: Rgb::BLACK,
            text_color: Rgb::RED,
            scale: 3,
        }
    }
}

/// Shows score, difficulty and the new-game hint.
///
/// Stateless; the numbers are passed in on every render.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    style: ScoreboardStyle,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format_line(score: u32, difficulty: u32) -> String {
        format!("SCORE: {}   DIFFICULTY: {}   F2: NEW GAME", score, difficulty)
    }

    pub fn render(
        &self,
        surface: &mut impl Surface,
        playfield: &Playfield,
        score: u32,
        difficulty: u32,
    ) -> Result<(), String> {
        let strip_height = playfield.scoreboard_height.max(0);
        let strip_y = playfield.height - strip_height;

        surface.fill_rect(
            ScreenRect::new(0, strip_y, playfield.width.max(0) as u32, strip_height as u32),
            self.style.background,
        )?;

        // Center the line inside the strip
        let line = Self::format_line(score, difficulty);
        let x = (playfield.width - text_width(&line, self.style.scale) as i32) / 2;
        let y = strip_y + (strip_height - text_height(self.style.scale) as i32) / 2;

        surface.draw_text(&line, x, y, self.style.text_color, self.style.scale)
    }
}
