use crate::player::Direction;

/// Keys the game reacts to. Everything else arrives as `Other` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    A,
    D,
    Escape,
    F2,
    Other,
}

/// Raw events coming from the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Anything that can hand over the events that arrived since the last poll
pub trait EventSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Actions the player can perform
///
/// The game loop only ever sees these, never raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start or stop moving in a direction
    Move { direction: Direction, active: bool },
    NewGame,
    Quit,
}

/// InputSystem translates window events into GameActions
///
/// Key bindings:
/// - A / D: hold to move left / right
/// - F2: start a new game (works at any time)
/// - Escape or closing the window: quit
#[derive(Debug, Default)]
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains the event source and returns the resulting actions in order
    pub fn poll_actions(&self, source: &mut impl EventSource) -> Vec<GameAction> {
        source
            .poll_events()
            .into_iter()
            .filter_map(|event| self.translate(event))
            .collect()
    }

    pub fn translate(&self, event: InputEvent) -> Option<GameAction> {
        match event {
            InputEvent::Quit => Some(GameAction::Quit),
            InputEvent::KeyDown(key) => self.handle_keydown(key),
            InputEvent::KeyUp(key) => self.handle_keyup(key),
        }
    }

    fn handle_keydown(&self, key: Key) -> Option<GameAction> {
        match key {
            Key::A => Some(GameAction::Move {
                direction: Direction::Left,
                active: true,
            }),
            Key::D => Some(GameAction::Move {
                direction: Direction::Right,
                active: true,
            }),
            Key::Escape => Some(GameAction::Quit),
            Key::F2 => Some(GameAction::NewGame),
            Key::Other => None,
        }
    }

    fn handle_keyup(&self, key: Key) -> Option<GameAction> {
        match key {
            Key::A => Some(GameAction::Move {
                direction: Direction::Left,
                active: false,
            }),
            Key::D => Some(GameAction::Move {
                direction: Direction::Right,
                active: false,
            }),
            _ => None,
        }
    }
}
