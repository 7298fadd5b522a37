//! Screen-Space GUI
//!
//! Elements drawn at fixed window positions on top of the playfield:
//!
//! - [`Scoreboard`] - black strip at the bottom with score and difficulty
//! - [`Banner`] - win/loss message once a round is over
//!
//! Both draw through [`crate::render::Surface`] with the bitmap font, so
//! they work the same on the SDL canvas and in tests.

pub mod banner;
pub mod scoreboard;

pub use banner::{Banner, BannerStyle};
pub use scoreboard::{Scoreboard, ScoreboardStyle};
