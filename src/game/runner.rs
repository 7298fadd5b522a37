// Game - the main loop
//
// One iteration: poll events -> apply actions -> tick -> render -> wait.
// Window, drawing and pacing come in through traits, so the loop runs the
// same against SDL2 and against the scripted fakes in the tests.

use rand::Rng;

use crate::clock::FramePacer;
use crate::error::GameError;
use crate::input_system::{EventSource, GameAction, InputSystem};
use crate::render::{FrameRenderer, Surface};

use super::session::GameSession;
use super::types::TickReport;

/// Totals across every round played since the window opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub frames: u64,
    pub coins_collected: u32,
    pub levels_gained: u32,
    pub rounds_finished: u32,
}

impl RunStats {
    fn record(&mut self, report: &TickReport) {
        self.frames += 1;
        self.coins_collected += report.coins_collected;
        self.levels_gained += report.levels_gained;
        if report.finished.is_some() {
            self.rounds_finished += 1;
        }
    }
}

pub struct Game<R: Rng> {
    session: GameSession<R>,
    input: InputSystem,
    renderer: FrameRenderer,
    stats: RunStats,
}

impl<R: Rng> Game<R> {
    pub fn new(session: GameSession<R>) -> Self {
        Game {
            session,
            input: InputSystem::new(),
            renderer: FrameRenderer::new(),
            stats: RunStats::default(),
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Applies one action; returns false when the player asked to quit.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move { direction, active } => {
                self.session.set_player_moving(direction, active);
            }
            GameAction::NewGame => self.session.new_game(),
            GameAction::Quit => return false,
        }
        true
    }

    /// Runs until a quit event arrives
    pub fn run(
        &mut self,
        events: &mut impl EventSource,
        surface: &mut impl Surface,
        clock: &mut impl FramePacer,
    ) -> Result<(), GameError> {
        'running: loop {
            for action in self.input.poll_actions(events) {
                if !self.apply(action) {
                    break 'running;
                }
            }

            let report = self.session.tick();
            self.stats.record(&report);
            if report.coins_collected > 0 {
                log::debug!(
                    "Collected {} coin(s), score {}",
                    report.coins_collected,
                    self.session.score()
                );
            }
            if report.levels_gained > 0 {
                log::debug!("Reached difficulty {}", self.session.difficulty());
            }
            if let Some(status) = report.finished {
                log::debug!("Round finished: {:?}", status);
            }

            self.renderer
                .render(surface, &self.session)
                .map_err(GameError::Render)?;

            clock.wait_for_next_frame();
        }

        log::info!(
            "Quitting with score {} at difficulty {} ({} coins, {} levels, {} rounds finished)",
            self.session.score(),
            self.session.difficulty(),
            self.stats.coins_collected,
            self.stats.levels_gained,
            self.stats.rounds_finished
        );
        Ok(())
    }
}
