use std::fmt;

use crate::assets::SpriteKind;

/// Errors that can stop the game from starting or keep a frame from rendering
///
/// The simulation itself never fails; every variant here comes from the
/// platform side (files, images, the window) or from a bad configuration.
#[derive(Debug)]
pub enum GameError {
    /// Reading a file from disk failed
    Io(std::io::Error),

    /// Config file is malformed or holds values the game can't run with
    Config(String),

    /// An image could not be loaded or decoded
    AssetLoad { name: String, reason: String },

    /// A sprite doesn't fit inside the playfield, so it can't be spawned
    SpriteTooLarge {
        kind: SpriteKind,
        width: u32,
        height: u32,
    },

    /// Drawing to the render surface failed
    Render(String),

    /// Window/event subsystem failure
    Platform(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "I/O error: {}", e),
            GameError::Config(msg) => write!(f, "Invalid config: {}", msg),
            GameError::AssetLoad { name, reason } => {
                write!(f, "Failed to load {}: {}", name, reason)
            }
            GameError::SpriteTooLarge { kind, width, height } => {
                write!(
                    f,
                    "Sprite {:?} ({}x{}) does not fit inside the playfield",
                    kind, width, height
                )
            }
            GameError::Render(msg) => write!(f, "Render error: {}", msg),
            GameError::Platform(msg) => write!(f, "Platform error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(error: std::io::Error) -> Self {
        GameError::Io(error)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(error: serde_json::Error) -> Self {
        GameError::Config(error.to_string())
    }
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_asset_load() {
        let err = GameError::AssetLoad {
            name: "coin.png".to_string(),
            reason: "file not found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to load coin.png: file not found");
    }

    #[test]
    fn test_into_string() {
        let message: String = GameError::Config("frame_rate must be positive".to_string()).into();
        assert_eq!(message, "Invalid config: frame_rate must be positive");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: GameError = json_err.into();
        assert!(matches!(err, GameError::Config(_)));
    }
}
