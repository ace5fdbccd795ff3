//! Transport command surface

use serde::{Deserialize, Serialize};

/// Closed set of transport commands
///
/// Symbolic remote-control key symbols map onto this enum; dispatch is an
/// exhaustive match in the controller rather than a string switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Play,
    Pause,
    Stop,
    TogglePlayPause,
    PlayPrevious,
    PlayNext,
}

impl Command {
    /// Parse a symbolic command string
    ///
    /// Returns `None` for unrecognized symbols; callers ignore those
    /// rather than erroring.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "play" => Some(Command::Play),
            "pause" => Some(Command::Pause),
            "stop" => Some(Command::Stop),
            "playpause" => Some(Command::TogglePlayPause),
            "rewind" => Some(Command::PlayPrevious),
            "fastforward" => Some(Command::PlayNext),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_symbols() {
        assert_eq!(Command::from_symbol("play"), Some(Command::Play));
        assert_eq!(Command::from_symbol("pause"), Some(Command::Pause));
        assert_eq!(Command::from_symbol("stop"), Some(Command::Stop));
        assert_eq!(
            Command::from_symbol("playpause"),
            Some(Command::TogglePlayPause)
        );
        assert_eq!(Command::from_symbol("rewind"), Some(Command::PlayPrevious));
        assert_eq!(
            Command::from_symbol("fastforward"),
            Some(Command::PlayNext)
        );
    }

    #[test]
    fn unknown_symbols_are_none() {
        assert_eq!(Command::from_symbol("eject"), None);
        assert_eq!(Command::from_symbol(""), None);
        assert_eq!(Command::from_symbol("PLAY"), None);
    }
}
