use std::collections::HashMap;

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::assets::{AssetLoader, SpriteKind};
use crate::entity::Size;
use crate::error::GameError;
use crate::input_system::{EventSource, InputEvent, Key};
use crate::render::{Rgb, ScreenRect, Surface};

/// Sprite textures, keyed by what they depict
pub struct TextureStore<'a> {
    creator: &'a TextureCreator<WindowContext>,
    textures: HashMap<SpriteKind, Texture<'a>>,
}

impl<'a> TextureStore<'a> {
    pub fn new(creator: &'a TextureCreator<WindowContext>) -> Self {
        TextureStore {
            creator,
            textures: HashMap::new(),
        }
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&Texture<'a>> {
        self.textures.get(&kind)
    }
}

impl AssetLoader for TextureStore<'_> {
    fn load(&mut self, kind: SpriteKind, path: &str) -> Result<Size, GameError> {
        let texture = self
            .creator
            .load_texture(path)
            .map_err(|e| GameError::AssetLoad {
                name: path.to_string(),
                reason: e,
            })?;

        let query = texture.query();
        log::debug!("Loaded {:?} from {} ({}x{})", kind, path, query.width, query.height);

        self.textures.insert(kind, texture);
        Ok(Size::new(query.width, query.height))
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::RGB(rgb.r, rgb.g, rgb.b)
}

fn to_rect(rect: ScreenRect) -> Rect {
    Rect::new(rect.x, rect.y, rect.width, rect.height)
}

/// A window canvas plus the sprite textures drawn on it
pub struct SdlSurface<'a> {
    canvas: Canvas<Window>,
    textures: TextureStore<'a>,
}

impl<'a> SdlSurface<'a> {
    pub fn new(canvas: Canvas<Window>, textures: TextureStore<'a>) -> Self {
        SdlSurface { canvas, textures }
    }
}

impl Surface for SdlSurface<'_> {
    fn clear(&mut self, color: Rgb) -> Result<(), String> {
        self.canvas.set_draw_color(to_color(color));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb) -> Result<(), String> {
        self.canvas.set_draw_color(to_color(color));
        self.canvas.fill_rect(to_rect(rect))
    }

    fn draw_sprite(&mut self, sprite: SpriteKind, x: i32, y: i32) -> Result<(), String> {
        let texture = self
            .textures
            .get(sprite)
            .ok_or_else(|| format!("No texture loaded for {:?}", sprite))?;
        let query = texture.query();

        self.canvas
            .copy(texture, None, Rect::new(x, y, query.width, query.height))
    }

    fn present(&mut self) -> Result<(), String> {
        self.canvas.present();
        Ok(())
    }
}

/// Maps the keys the game cares about; everything else is `Key::Other`
pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::A => Key::A,
        Keycode::D => Key::D,
        Keycode::Escape => Key::Escape,
        Keycode::F2 => Key::F2,
        _ => Key::Other,
    }
}

/// Reads window events from the SDL event pump
pub struct SdlEvents {
    event_pump: EventPump,
}

impl SdlEvents {
    pub fn new(event_pump: EventPump) -> Self {
        SdlEvents { event_pump }
    }
}

impl EventSource for SdlEvents {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. } => Some(InputEvent::Quit),
                // Auto-repeat would re-send a held key every few frames
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => Some(InputEvent::KeyDown(map_keycode(keycode))),
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => Some(InputEvent::KeyUp(map_keycode(keycode))),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keycode() {
        assert_eq!(map_keycode(Keycode::A), Key::A);
        assert_eq!(map_keycode(Keycode::D), Key::D);
        assert_eq!(map_keycode(Keycode::Escape), Key::Escape);
        assert_eq!(map_keycode(Keycode::F2), Key::F2);
        assert_eq!(map_keycode(Keycode::Space), Key::Other);
    }

    #[test]
    fn test_color_and_rect_conversion() {
        assert_eq!(to_color(Rgb::GREY), Color::RGB(128, 128, 128));
        let rect = to_rect(ScreenRect::new(3, -4, 10, 20));
        assert_eq!((rect.x(), rect.y(), rect.width(), rect.height()), (3, -4, 10, 20));
    }
}
