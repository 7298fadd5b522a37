//! Sprite identities and their loaded sizes
//!
//! The simulation never sees an image, only its width and height. Whatever
//! loads the images (SDL textures in the binary, a stub in tests) implements
//! [`AssetLoader`] and reports the size back.

use crate::config::AssetPaths;
use crate::entity::{Playfield, Size};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Robot,
    Coin,
    Monster,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 3] = [SpriteKind::Robot, SpriteKind::Coin, SpriteKind::Monster];

    pub fn path<'a>(&self, paths: &'a AssetPaths) -> &'a str {
        match self {
            SpriteKind::Robot => &paths.robot,
            SpriteKind::Coin => &paths.coin,
            SpriteKind::Monster => &paths.monster,
        }
    }
}

/// Loads a sprite image and keeps whatever handle it needs for drawing later
pub trait AssetLoader {
    fn load(&mut self, kind: SpriteKind, path: &str) -> Result<Size, GameError>;
}

/// Pixel sizes of every sprite, as reported by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSizes {
    pub robot: Size,
    pub coin: Size,
    pub monster: Size,
}

impl SpriteSizes {
    /// Loads all three sprites; the first failure aborts.
    pub fn load(loader: &mut impl AssetLoader, paths: &AssetPaths) -> Result<Self, GameError> {
        let robot = loader.load(SpriteKind::Robot, SpriteKind::Robot.path(paths))?;
        let coin = loader.load(SpriteKind::Coin, SpriteKind::Coin.path(paths))?;
        let monster = loader.load(SpriteKind::Monster, SpriteKind::Monster.path(paths))?;

        log::info!(
            "Loaded sprites: robot {}x{}, coin {}x{}, monster {}x{}",
            robot.width,
            robot.height,
            coin.width,
            coin.height,
            monster.width,
            monster.height
        );

        Ok(SpriteSizes {
            robot,
            coin,
            monster,
        })
    }

    pub fn get(&self, kind: SpriteKind) -> Size {
        match kind {
            SpriteKind::Robot => self.robot,
            SpriteKind::Coin => self.coin,
            SpriteKind::Monster => self.monster,
        }
    }

    /// Every sprite must fit on the floor above the scoreboard, otherwise
    /// spawning and clamping have no valid positions.
    pub fn check_fits(&self, playfield: &Playfield) -> Result<(), GameError> {
        for kind in SpriteKind::ALL {
            let size = self.get(kind);
            if !playfield.fits(size) {
                return Err(GameError::SpriteTooLarge {
                    kind,
                    width: size.width,
                    height: size.height,
                });
            }
        }
        Ok(())
    }
}
