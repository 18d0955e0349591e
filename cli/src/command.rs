use ripple_grid_core::Coord;
use ripple_grid_protocol::ClientMessage;
use std::str::FromStr;
use thiserror::Error;

pub(crate) const USAGE: &str = "\
commands:
  click <row> <col>   increment a cell (alias: c)
  reset               start over
  undo                go back one snapshot
  show                print the grid
  stats               print totals
  help                this text
  quit                leave";

/// One line of text-mode input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Client(ClientMessage),
    Show,
    Stats,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("Usage: click <row> <col>")]
    MissingCoordinates,
    #[error("`{0}` is not a coordinate")]
    BadCoordinate(String),
    #[error("Unexpected argument `{0}`")]
    TrailingArgument(String),
}

fn parse_coord(word: Option<&str>) -> Result<Coord, CommandError> {
    let word = word.ok_or(CommandError::MissingCoordinates)?;
    word.parse()
        .map_err(|_| CommandError::BadCoordinate(word.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();

        let command = match name.as_str() {
            "click" | "c" => {
                let row = parse_coord(words.next())?;
                let col = parse_coord(words.next())?;
                Command::Client(ClientMessage::Click { row, col })
            }
            "reset" => Command::Client(ClientMessage::Reset),
            "undo" => Command::Client(ClientMessage::Undo),
            "show" => Command::Show,
            "stats" => Command::Stats,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(name)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

/// Parses a line, skipping blanks and `#` comments.
pub(crate) fn parse_line(line: &str) -> Option<Result<Command, CommandError>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line.parse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_click_and_aliases() {
        assert_eq!(
            "click 0 2".parse(),
            Ok(Command::Client(ClientMessage::Click { row: 0, col: 2 }))
        );
        assert_eq!(
            "C 2 1".parse(),
            Ok(Command::Client(ClientMessage::Click { row: 2, col: 1 }))
        );
        assert_eq!("q".parse(), Ok(Command::Quit));
        assert_eq!("undo".parse(), Ok(Command::Client(ClientMessage::Undo)));
    }

    #[test]
    fn out_of_grid_numbers_still_parse() {
        // the engine owns the range check
        assert_eq!(
            "click 7 0".parse(),
            Ok(Command::Client(ClientMessage::Click { row: 7, col: 0 }))
        );
    }

    #[test]
    fn reports_malformed_lines() {
        assert_eq!(
            "click 1".parse::<Command>(),
            Err(CommandError::MissingCoordinates)
        );
        assert_eq!(
            "click -1 0".parse::<Command>(),
            Err(CommandError::BadCoordinate("-1".to_string()))
        );
        assert_eq!(
            "reset now".parse::<Command>(),
            Err(CommandError::TrailingArgument("now".to_string()))
        );
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# warm up"), None);
        assert_eq!(parse_line(" show "), Some(Ok(Command::Show)));
    }
}
