//! Platform layer
//!
//! Connects the game's traits to SDL2:
//! - [`sdl::TextureStore`] loads sprite images ([`crate::assets::AssetLoader`])
//! - [`sdl::SdlSurface`] draws frames on a window canvas ([`crate::render::Surface`])
//! - [`sdl::SdlEvents`] reads the event pump ([`crate::input_system::EventSource`])
//!
//! Only built with the `sdl` feature.

pub mod sdl;

pub use sdl::{SdlEvents, SdlSurface, TextureStore};
