/// Axis-aligned collision detection for Coiner
///
/// Everything in the game is a rectangle: the robot, each coin and each ghost.
/// This module provides the hitbox type, the overlap test and a helper that
/// checks one entity against a whole collection.
///
/// # Boundary policy
///
/// Hitboxes are half-open: `[x_min, x_max) × [y_min, y_max)`. Two boxes that
/// only share an edge do NOT overlap, a box fully inside another does, and the
/// result never depends on argument order.

/// Half-open bounding box in window coordinates.
///
/// `x_max` and `y_max` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Hitbox {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Hitbox {
            x_min: x,
            x_max: x + width as i32,
            y_min: y,
            y_max: y + height as i32,
        }
    }

    /// Checks whether two hitboxes share at least one pixel.
    ///
    /// On each axis the spans intersect when each one starts before the other
    /// ends; both axes must intersect.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        let x_overlap = self.x_min < other.x_max && other.x_min < self.x_max;
        let y_overlap = self.y_min < other.y_max && other.y_min < self.y_max;

        x_overlap && y_overlap
    }
}

/// Anything with a rectangular footprint that can touch something else.
pub trait Collidable {
    fn hitbox(&self) -> Hitbox;
}

/// Checks one entity against a collection and returns the indices it overlaps.
///
/// The robot is tested against every coin (or every ghost) once per tick, so
/// the caller gets back the positions in the slice that need handling.
pub fn colliding_indices<T: Collidable>(entity: &impl Collidable, entities: &[T]) -> Vec<usize> {
    let bounds = entity.hitbox();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| bounds.overlaps(&other.hitbox()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    impl Collidable for Hitbox {
        fn hitbox(&self) -> Hitbox {
            *self
        }
    }

    #[test]
    fn test_overlapping() {
        let a = Hitbox::new(0, 0, 32, 32);
        let b = Hitbox::new(16, 16, 32, 32);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Hitbox::new(0, 0, 32, 32);
        let right = Hitbox::new(32, 0, 32, 32);
        let below = Hitbox::new(0, 32, 32, 32);

        assert!(!a.overlaps(&right));
        assert!(!right.overlaps(&a));
        assert!(!a.overlaps(&below));
        assert!(!below.overlaps(&a));
    }

    #[test]
    fn test_one_pixel_overlap() {
        let a = Hitbox::new(0, 0, 32, 32);
        let b = Hitbox::new(31, 31, 32, 32);

        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_separated() {
        let a = Hitbox::new(0, 0, 32, 32);
        let b = Hitbox::new(100, 100, 32, 32);

        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained() {
        // A coin wider than the robot swallowing it whole still counts
        let large = Hitbox::new(0, 0, 100, 100);
        let small = Hitbox::new(25, 25, 50, 50);

        assert!(large.overlaps(&small));
        assert!(small.overlaps(&large));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = Hitbox::new(0, 0, 32, 32);
        let same_column = Hitbox::new(0, 200, 32, 32);

        assert!(!a.overlaps(&same_column));
    }

    #[test]
    fn test_colliding_indices() {
        let robot = Hitbox::new(100, 100, 50, 50);
        let coins = vec![
            Hitbox::new(0, 0, 20, 20),
            Hitbox::new(120, 120, 20, 20),
            Hitbox::new(150, 100, 20, 20),
            Hitbox::new(140, 90, 20, 20),
        ];

        assert_eq!(colliding_indices(&robot, &coins), vec![1, 3]);
        assert!(colliding_indices(&robot, &coins[2..3]).is_empty());
    }

    fn hitbox_strategy() -> impl Strategy<Value = Hitbox> {
        // Small coordinate range so touching and nested boxes come up often
        (-20i32..20, -20i32..20, 1u32..20, 1u32..20)
            .prop_map(|(x, y, w, h)| Hitbox::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in hitbox_strategy(), b in hitbox_strategy()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_box_overlaps_itself(a in hitbox_strategy()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_touching_neighbour_never_overlaps(a in hitbox_strategy(), w in 1u32..20, h in 1u32..20) {
            let right = Hitbox::new(a.x_max, a.y_min, w, h);
            let below = Hitbox::new(a.x_min, a.y_max, w, h);
            prop_assert!(!a.overlaps(&right));
            prop_assert!(!right.overlaps(&a));
            prop_assert!(!a.overlaps(&below));
            prop_assert!(!below.overlaps(&a));
        }
    }
}
