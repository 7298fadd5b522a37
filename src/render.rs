/// Frame rendering for Coiner
///
/// The game draws through the [`Surface`] trait instead of talking to SDL2
/// directly. The binary implements it on top of an SDL canvas; tests implement
/// it with a recorder that just remembers the draw calls.
///
/// # Frame layout
///
/// 1. Grey background
/// 2. Ghosts, then coins, then the robot (later draws cover earlier ones)
/// 3. Scoreboard strip along the bottom
/// 4. Win/loss banner, only once the round is over
use rand::Rng;

use crate::assets::SpriteKind;
use crate::faller::Faller;
use crate::game::{GameSession, GameStatus};
use crate::gui::{Banner, Scoreboard};
use crate::player::Player;
use crate::text::draw_bitmap_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GREY: Rgb = Rgb::new(128, 128, 128);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Screen-space rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        ScreenRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Something the game can draw a frame on.
///
/// Nothing shows up until `present()` is called.
pub trait Surface {
    fn clear(&mut self, color: Rgb) -> Result<(), String>;

    fn fill_rect(&mut self, rect: ScreenRect, color: Rgb) -> Result<(), String>;

    /// Draws a sprite image with its top-left corner at (`x`, `y`)
    fn draw_sprite(&mut self, sprite: SpriteKind, x: i32, y: i32) -> Result<(), String>;

    /// Draws text using the built-in bitmap font; `scale` multiplies the 5x7 glyphs
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgb, scale: u32) -> Result<(), String> {
        draw_bitmap_text(self, text, x, y, color, scale)
    }

    fn present(&mut self) -> Result<(), String>;
}

/// Things that appear on the playfield, in the order they get painted.
pub enum Renderable<'a> {
    Faller(&'a Faller),
    Player(&'a Player),
}

impl Renderable<'_> {
    fn render(&self, surface: &mut (impl Surface + ?Sized)) -> Result<(), String> {
        match self {
            Renderable::Faller(faller) => {
                let (x, y) = faller.body.position();
                surface.draw_sprite(faller.kind.sprite(), x, y)
            }
            Renderable::Player(player) => {
                let (x, y) = player.position();
                surface.draw_sprite(SpriteKind::Robot, x, y)
            }
        }
    }
}

/// Collects everything on the playfield in paint order: ghosts, coins, robot.
pub fn collect_renderables<R: Rng>(session: &GameSession<R>) -> Vec<Renderable<'_>> {
    let mut renderables =
        Vec::with_capacity(session.ghosts().len() + session.coins().len() + 1);

    renderables.extend(session.ghosts().iter().map(Renderable::Faller));
    renderables.extend(session.coins().iter().map(Renderable::Faller));
    renderables.push(Renderable::Player(session.player()));

    renderables
}

/// Draws complete frames: playfield, scoreboard and end-of-round banner.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    pub background: Rgb,
    pub scoreboard: Scoreboard,
    pub won_banner: Banner,
    pub lost_banner: Banner,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        FrameRenderer {
            background: Rgb::GREY,
            scoreboard: Scoreboard::new(),
            won_banner: Banner::won(),
            lost_banner: Banner::lost(),
        }
    }
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the current state of `session` and presents it.
    ///
    /// The banner is redrawn every frame while the round stays won or lost.
    pub fn render<R: Rng>(
        &self,
        surface: &mut impl Surface,
        session: &GameSession<R>,
    ) -> Result<(), String> {
        surface.clear(self.background)?;

        for renderable in collect_renderables(session) {
            renderable.render(surface)?;
        }

        let playfield = session.playfield();
        self.scoreboard
            .render(surface, playfield, session.score(), session.difficulty())?;

        match session.status() {
            GameStatus::Won => self.won_banner.render(surface, playfield)?,
            GameStatus::Lost => self.lost_banner.render(surface, playfield)?,
            GameStatus::Ongoing => {}
        }

        surface.present()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{DrawCall, RecordingSurface};
    use super::*;
    use crate::assets::SpriteSizes;
    use crate::config::GameConfig;
    use crate::entity::Size;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> GameSession<Pcg32> {
        let sprites = SpriteSizes {
            robot: Size::new(50, 86),
            coin: Size::new(40, 40),
            monster: Size::new(50, 70),
        };
        GameSession::new(&GameConfig::default(), sprites, Pcg32::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn test_paint_order() {
        let session = session();
        let mut surface = RecordingSurface::default();
        FrameRenderer::new().render(&mut surface, &session).unwrap();

        assert_eq!(surface.calls.first(), Some(&DrawCall::Clear(Rgb::GREY)));
        assert_eq!(surface.calls.last(), Some(&DrawCall::Present));

        let kinds: Vec<SpriteKind> = surface.sprites().iter().map(|s| s.0).collect();
        assert_eq!(kinds.len(), 12);
        assert_eq!(kinds[0], SpriteKind::Monster);
        assert!(kinds[1..11].iter().all(|k| *k == SpriteKind::Coin));
        assert_eq!(kinds[11], SpriteKind::Robot);

        let robot = surface.sprites()[11];
        assert_eq!((robot.1, robot.2), session.player().position());
    }

    #[test]
    fn test_scoreboard_without_banner_while_playing() {
        let session = session();
        let mut surface = RecordingSurface::default();
        FrameRenderer::new().render(&mut surface, &session).unwrap();

        let texts = surface.texts();
        assert_eq!(texts.len(), 1);
        assert!(texts[0].contains("SCORE: 0"));
        assert!(texts[0].contains("DIFFICULTY: 1"));
    }

    #[test]
    fn test_win_banner_on_every_frame() {
        let mut session = session();
        while session.is_ongoing() {
            session.escalate_difficulty();
        }
        assert!(session.has_won());

        let renderer = FrameRenderer::new();
        let mut surface = RecordingSurface::default();
        renderer.render(&mut surface, &session).unwrap();
        renderer.render(&mut surface, &session).unwrap();

        let banners: Vec<String> = surface
            .texts()
            .into_iter()
            .filter(|t| t.contains("WINNER"))
            .collect();
        assert_eq!(banners.len(), 2);
        assert_eq!(surface.frames_presented(), 2);
    }
}
