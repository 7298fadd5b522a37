//! Falling coins and ghosts
//!
//! Coins and ghosts move identically: they drop `fall_speed` pixels per tick and
//! reappear somewhere above the window once they pass the bottom edge. Only the
//! session cares which is which, so the difference is a [`FallerKind`] tag
//! rather than a separate type.

use rand::Rng;

use crate::assets::SpriteKind;
use crate::collision::{Collidable, Hitbox};
use crate::entity::{Body, Playfield, Size};

/// Fall speed every faller starts with
pub const BASE_FALL_SPEED: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallerKind {
    /// Catching it scores a point
    Coin,
    /// Touching it ends the game
    Ghost,
}

impl FallerKind {
    pub fn sprite(&self) -> SpriteKind {
        match self {
            FallerKind::Coin => SpriteKind::Coin,
            FallerKind::Ghost => SpriteKind::Monster,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Faller {
    pub kind: FallerKind,
    pub body: Body,
    fall_speed: i32,
}

impl Faller {
    /// Creates a faller at a random spot above the window
    pub fn spawn(kind: FallerKind, size: Size, playfield: &Playfield, rng: &mut impl Rng) -> Self {
        let mut faller = Faller {
            kind,
            body: Body::new(0, 0, size),
            fall_speed: BASE_FALL_SPEED,
        };
        faller.respawn(playfield, rng);
        faller
    }

    /// Moves to a fresh random spot above the window.
    ///
    /// x is anywhere the sprite fits horizontally. y ranges from two window
    /// heights above the top down to just out of sight, so fallers spawned
    /// together arrive at different times.
    pub fn respawn(&mut self, playfield: &Playfield, rng: &mut impl Rng) {
        let size = self.body.size();
        let x = rng.random_range(0..=playfield.max_x(size));
        let y = rng.random_range(-2 * playfield.height..=-(size.height as i32));
        self.body.move_to(x, y);
    }

    pub fn advance(&mut self) {
        self.body.y += self.fall_speed;
    }

    pub fn fall_speed(&self) -> i32 {
        self.fall_speed
    }

    pub fn set_fall_speed(&mut self, speed: i32) {
        self.fall_speed = speed;
    }

    /// True once the faller's top edge has passed the bottom of the window
    pub fn is_below(&self, playfield: &Playfield) -> bool {
        self.body.y > playfield.height
    }
}

impl Collidable for Faller {
    fn hitbox(&self) -> Hitbox {
        self.body.hitbox()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FIELD: Playfield = Playfield {
        width: 1000,
        height: 613,
        scoreboard_height: 50,
    };
    const COIN: Size = Size::new(40, 40);

    #[test]
    fn test_spawns_above_window() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            let coin = Faller::spawn(FallerKind::Coin, COIN, &FIELD, &mut rng);
            assert!(coin.body.y <= -40);
            assert_eq!(coin.fall_speed(), BASE_FALL_SPEED);
        }
    }

    #[test]
    fn test_advance_uses_fall_speed() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut ghost = Faller::spawn(FallerKind::Ghost, COIN, &FIELD, &mut rng);
        let start = ghost.body.y;

        ghost.advance();
        assert_eq!(ghost.body.y, start + 1);

        ghost.set_fall_speed(4);
        ghost.advance();
        assert_eq!(ghost.body.y, start + 5);
    }

    #[test]
    fn test_is_below_is_strict() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut coin = Faller::spawn(FallerKind::Coin, COIN, &FIELD, &mut rng);

        coin.body.y = 613;
        assert!(!coin.is_below(&FIELD));
        coin.body.y = 614;
        assert!(coin.is_below(&FIELD));
    }

    #[test]
    fn test_respawn_keeps_speed_and_kind() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut ghost = Faller::spawn(FallerKind::Ghost, COIN, &FIELD, &mut rng);
        ghost.set_fall_speed(7);
        ghost.body.y = 700;

        ghost.respawn(&FIELD, &mut rng);
        assert_eq!(ghost.fall_speed(), 7);
        assert_eq!(ghost.kind, FallerKind::Ghost);
        assert!(ghost.body.y < 0);
    }

    #[test]
    fn test_sprite_mapping() {
        assert_eq!(FallerKind::Coin.sprite(), SpriteKind::Coin);
        assert_eq!(FallerKind::Ghost.sprite(), SpriteKind::Monster);
    }

    proptest! {
        #[test]
        fn prop_respawn_lands_in_spawn_area(seed in any::<u64>(), width in 1u32..200, height in 1u32..200) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let size = Size::new(width, height);
            let coin = Faller::spawn(FallerKind::Coin, size, &FIELD, &mut rng);

            prop_assert!(coin.body.x >= 0);
            prop_assert!(coin.body.x <= FIELD.width - width as i32);
            prop_assert!(coin.body.y >= -2 * FIELD.height);
            prop_assert!(coin.body.y <= -(height as i32));
        }
    }
}
