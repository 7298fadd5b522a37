use crate::collision::{Collidable, Hitbox};
use crate::entity::{Body, Playfield, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The robot the player steers along the floor.
///
/// Movement is intent-based: key-down sets a flag, key-up clears it, and each
/// tick moves the robot by `step` pixels for every active flag whose way is
/// still open.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub moving_left: bool,
    pub moving_right: bool,
    step: i32,
}

impl Player {
    /// Creates the robot standing at the centre of the floor
    pub fn new(size: Size, step: i32, playfield: &Playfield) -> Self {
        let mut player = Player {
            body: Body::new(0, 0, size),
            moving_left: false,
            moving_right: false,
            step,
        };
        player.respawn(playfield);
        player
    }

    pub fn set_moving(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Left => self.moving_left = active,
            Direction::Right => self.moving_right = active,
        }
    }

    /// Moves the robot one tick.
    ///
    /// Each direction is gated by its own wall check, so holding both keys
    /// steps left then right in the same tick.
    pub fn advance(&mut self, playfield: &Playfield) {
        if self.moving_left && self.body.x > 0 {
            self.body.x = (self.body.x - self.step).max(0);
        }
        if self.moving_right && self.body.x < playfield.max_x(self.body.size()) {
            self.body.x = (self.body.x + self.step).min(playfield.max_x(self.body.size()));
        }
    }

    /// Puts the robot back at the centre of the floor, right above the scoreboard
    pub fn respawn(&mut self, playfield: &Playfield) {
        let size = self.body.size();
        let x = playfield.width / 2 - size.width as i32 / 2;
        self.body.move_to(x, playfield.floor_y(size));
    }

    pub fn position(&self) -> (i32, i32) {
        self.body.position()
    }
}

impl Collidable for Player {
    fn hitbox(&self) -> Hitbox {
        self.body.hitbox()
    }
}
