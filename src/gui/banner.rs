//! End-of-Round Banner
//!
//! Large centered text shown over the frozen playfield once a round is won
//! or lost. It stays up every frame until F2 starts a new game.

use crate::entity::Playfield;
use crate::render::{Rgb, Surface};
use crate::text::text_width;

/// Configuration for banner appearance
#[derive(Debug, Clone)]
pub struct BannerStyle {
    pub color: Rgb,

    /// Font scale (a glyph is 5x7 pixels at scale 1)
    pub scale: u32,

    /// Distance of the text's top edge from the top of the window
    pub y: i32,
}

impl Default for BannerStyle {
    fn default() -> Self {
        BannerStyle {
            color: Rgb::RED,
            scale: 5,
            y: 100,
        }
    }
}

/// A single line of text centered horizontally in the window
#[derive(Debug, Clone)]
pub struct Banner {
    message: String,
    style: BannerStyle,
}

impl Banner {
    pub fn new(message: impl Into<String>, style: BannerStyle) -> Self {
        Banner {
            message: message.into(),
            style,
        }
    }

    /// "WINNER WINNER CHICKEN DINNER!"
    ///
    /// The message is long, so it uses a smaller scale to fit the window.
    pub fn won() -> Self {
        Self::new("WINNER WINNER CHICKEN DINNER!", BannerStyle::default())
    }

    /// "YOU LOST!" in big letters
    pub fn lost() -> Self {
        Self::new(
            "YOU LOST!",
            BannerStyle {
                scale: 12,
                ..BannerStyle::default()
            },
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Left edge that centers the message in a window `window_width` wide
    pub fn x(&self, window_width: i32) -> i32 {
        (window_width - text_width(&self.message, self.style.scale) as i32) / 2
    }

    pub fn render(&self, surface: &mut impl Surface, playfield: &Playfield) -> Result<(), String> {
        surface.draw_text(
            &self.message,
            self.x(playfield.width),
            self.style.y,
            self.style.color,
            self.style.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{DrawCall, RecordingSurface};

    #[test]
    fn test_banners_fit_default_window() {
        for banner in [Banner::won(), Banner::lost()] {
            let x = banner.x(1000);
            assert!(x >= 0, "{} overflows the window", banner.message());
        }
    }

    #[test]
    fn test_lost_banner_is_centered() {
        // 9 chars * 6 px * scale 12 = 648 px wide
        assert_eq!(Banner::lost().x(1000), 176);
    }

    #[test]
    fn test_render_draws_message_once() {
        let playfield = Playfield::new(1000, 613, 50);
        let mut surface = RecordingSurface::default();
        Banner::lost().render(&mut surface, &playfield).unwrap();

        assert_eq!(
            surface.calls,
            vec![DrawCall::Text("YOU LOST!".to_string(), 176, 100)]
        );
        assert!(surface.rects.iter().all(|(_, color)| *color == Rgb::RED));
    }
}
