use anyhow::Context;
use ripple_grid_core::{CellShade, Grid, GridSession, GridStats};
use ripple_grid_protocol::{
    CellView, ClientMessage, ServerMessage, ShadeView, StatsView, decode_client, encode_server,
};
use std::io::{BufRead, Write};

use crate::command::{Command, USAGE, parse_line};
use crate::render;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Text,
    Json,
}

fn shade_view(shade: CellShade) -> ShadeView {
    match shade {
        CellShade::Even => ShadeView::Even,
        CellShade::Odd => ShadeView::Odd,
        CellShade::Locked => ShadeView::Locked,
    }
}

fn stats_view(stats: GridStats) -> StatsView {
    StatsView {
        total_value: stats.total_value,
        locked_cells: stats.locked_cells,
    }
}

fn grid_view(grid: &Grid) -> Vec<Vec<CellView>> {
    grid.to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| CellView {
                    value: cell.value(),
                    locked: cell.is_locked(),
                    shade: shade_view(cell.shade()),
                })
                .collect()
        })
        .collect()
}

/// Applies protocol messages to a session.
pub(crate) struct Driver {
    session: GridSession,
}

impl Driver {
    pub(crate) fn new(session: GridSession) -> Self {
        Self { session }
    }

    pub(crate) fn handle(&mut self, message: ClientMessage) -> ServerMessage {
        use ClientMessage::*;

        let outcome = match message {
            Click { row, col } => match self.session.click(row, col) {
                Ok(outcome) => outcome.as_str(),
                Err(err) => return ServerMessage::rejected(err),
            },
            Reset => {
                self.session.reset();
                "reset"
            }
            Undo if self.session.undo() => "undone",
            Undo => return ServerMessage::rejected("Nothing to undo"),
            Snapshot => return self.snapshot(None),
        };

        self.snapshot(Some(outcome))
    }

    fn snapshot(&self, outcome: Option<&str>) -> ServerMessage {
        let grid = self.session.grid();
        ServerMessage::Grid {
            cells: grid_view(grid),
            stats: stats_view(grid.stats()),
            outcome: outcome.map(str::to_string),
        }
    }

    fn json_line(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        let reply = match decode_client(line) {
            Ok(message) => self.handle(message),
            Err(err) => {
                log::warn!("{err}");
                ServerMessage::rejected(err)
            }
        };
        writeln!(out, "{}", encode_server(&reply)?)?;
        Ok(())
    }

    /// Returns `false` once the user asked to quit.
    fn text_line(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<bool> {
        let command = match parse_line(line) {
            None => return Ok(true),
            Some(Ok(command)) => command,
            Some(Err(err)) => {
                writeln!(out, "error: {err}")?;
                return Ok(true);
            }
        };

        match command {
            Command::Client(message) => match self.handle(message) {
                ServerMessage::Grid { outcome, .. } => {
                    if let Some(outcome) = outcome {
                        writeln!(out, "{outcome}")?;
                    }
                    render::write_grid(out, self.session.grid())?;
                }
                ServerMessage::Rejected { reason } => writeln!(out, "error: {reason}")?,
            },
            Command::Show => render::write_grid(out, self.session.grid())?,
            Command::Stats => render::write_stats(out, &self.session.stats())?,
            Command::Help => writeln!(out, "{USAGE}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

pub(crate) fn run(
    input: impl BufRead,
    mut out: impl Write,
    mode: Mode,
    session: GridSession,
) -> anyhow::Result<()> {
    let mut driver = Driver::new(session);

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match mode {
            Mode::Json => driver.json_line(&line, &mut out)?,
            Mode::Text => {
                if !driver.text_line(&line, &mut out)? {
                    break;
                }
            }
        }
    }

    log::debug!("Input finished after {} clicks", driver.session.clicks());
    out.flush().context("Failed to flush output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_grid_core::SessionConfig;
    use ripple_grid_protocol::decode_server;

    fn run_to_string(input: &str, mode: Mode) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, mode, GridSession::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn handle_reports_outcomes() {
        let mut driver = Driver::new(GridSession::new(SessionConfig::new(8)));

        let reply = driver.handle(ClientMessage::Click { row: 2, col: 0 });
        let ServerMessage::Grid { cells, stats, outcome } = reply else {
            panic!("expected a grid reply");
        };
        assert_eq!(outcome.as_deref(), Some("incremented"));
        assert_eq!(cells[2][0].value, 1);
        assert_eq!(cells[2][0].shade, ShadeView::Odd);
        assert_eq!(stats.total_value, 1);

        assert!(matches!(
            driver.handle(ClientMessage::Click { row: 0, col: 3 }),
            ServerMessage::Rejected { .. }
        ));
        assert!(matches!(
            driver.handle(ClientMessage::Undo),
            ServerMessage::Grid { .. }
        ));
        assert_eq!(
            driver.handle(ClientMessage::Undo),
            ServerMessage::rejected("Nothing to undo")
        );
    }

    #[test]
    fn text_session_prints_grid_and_stops_at_quit() {
        let output = run_to_string("# comment\nc 0 0\nc 9 9\nquit\nc 1 1\n", Mode::Text);

        assert_eq!(
            output,
            "incremented\n  1*   0.   0.\n  0.   0.   0.\n  0.   0.   0.\ntotal=1 locked=0/9\n\
             error: Invalid coordinates (9, 9), expected values in 0..=2\n"
        );
    }

    #[test]
    fn text_session_reports_bad_commands_and_continues() {
        let output = run_to_string("dance\nstats\n", Mode::Text);

        assert_eq!(
            output,
            "error: Unknown command `dance`, try `help`\ntotal=0 locked=0/9\n"
        );
    }

    #[test]
    fn json_session_answers_every_line() {
        let input = concat!(
            r#"{"type":"click","row":0,"col":0}"#,
            "\n\n",
            "not json\n",
            r#"{"type":"snapshot"}"#,
            "\n",
        );

        let output = run_to_string(input, Mode::Json);
        let replies: Vec<ServerMessage> = output
            .lines()
            .map(|line| decode_server(line).unwrap())
            .collect();

        assert_eq!(replies.len(), 3);
        assert!(matches!(
            &replies[0],
            ServerMessage::Grid { outcome: Some(outcome), .. } if outcome == "incremented"
        ));
        assert!(matches!(&replies[1], ServerMessage::Rejected { .. }));
        assert!(matches!(
            &replies[2],
            ServerMessage::Grid { outcome: None, stats, .. } if stats.total_value == 1
        ));
    }
}
