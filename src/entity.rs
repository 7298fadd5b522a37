//! Shared geometry for everything drawn on the playfield
//!
//! A [`Body`] is a sprite-sized rectangle with a position. The robot, coins and
//! ghosts all wrap one; the size comes from the sprite image and is fixed once
//! the body exists.

use crate::collision::{Collidable, Hitbox};
use crate::config::GameConfig;

/// Pixel dimensions of a sprite image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }
}

/// The window area entities live in.
///
/// The bottom `scoreboard_height` pixels belong to the scoreboard; the robot
/// stands right on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub scoreboard_height: i32,
}

impl Playfield {
    pub fn new(width: u32, height: u32, scoreboard_height: u32) -> Self {
        Playfield {
            width: width as i32,
            height: height as i32,
            scoreboard_height: scoreboard_height as i32,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.window_width,
            config.window_height,
            config.scoreboard_height,
        )
    }

    /// Largest x that keeps a body of `size` fully inside the window
    pub fn max_x(&self, size: Size) -> i32 {
        self.width - size.width as i32
    }

    /// y at which a body of `size` rests on top of the scoreboard
    pub fn floor_y(&self, size: Size) -> i32 {
        self.height - size.height as i32 - self.scoreboard_height
    }

    /// Whether a body of `size` can be placed inside the playfield at all
    pub fn fits(&self, size: Size) -> bool {
        self.max_x(size) >= 0 && self.floor_y(size) >= 0
    }
}

/// A positioned, sized rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: i32,
    pub y: i32,
    size: Size,
}

impl Body {
    pub fn new(x: i32, y: i32, size: Size) -> Self {
        Body { x, y, size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width as i32
    }

    pub fn height(&self) -> i32 {
        self.size.height as i32
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

impl Collidable for Body {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.size.width, self.size.height)
    }
}
