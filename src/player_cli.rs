#![cfg(feature = "std")]
//! Terminal front end: board rendering, input parsing and the interactive
//! human versus CPU loop.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::{
    board::Gameboard,
    cell::CellStatus,
    common::{AttackResult, Coordinate},
    config::MAX_ROWS,
    game::{AttackReport, GameSession, GameStatus},
    ship::Orientation,
};

/// Letter for a row index, `?` past `Z`.
fn row_label(row: usize) -> char {
    (b'A'..=b'Z').nth(row).map_or('?', char::from)
}

/// Row letter, 1-based column: `(1, 6)` is `B7`.
pub fn coord_to_string(coord: Coordinate) -> String {
    format!("{}{}", row_label(coord.row), coord.col + 1)
}

/// Parse `B7` style input against a board of the given size.
pub fn parse_coordinate(input: &str, columns: usize, rows: usize) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let row_ch = chars
        .next()
        .ok_or("No row letter")?
        .to_ascii_uppercase();
    let last_row = row_label(rows.saturating_sub(1).min(MAX_ROWS - 1));
    if !row_ch.is_ascii_uppercase() {
        return Err(format!(
            "Invalid row '{}' - must be a letter A-{}",
            row_ch, last_row
        ));
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= rows {
        return Err(format!(
            "Row '{}' out of bounds - must be A-{}",
            row_ch, last_row
        ));
    }
    let col_str: String = chars.collect();
    if col_str.is_empty() {
        return Err("Too short - need row letter and column number (e.g., B7)".to_string());
    }
    let col: usize = col_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 1-{}", col_str, columns))?;
    if col == 0 || col > columns {
        return Err(format!("Column {} out of bounds - must be 1-{}", col, columns));
    }
    Ok(Coordinate::new(row, col - 1))
}

/// Parse `A1 h` / `C4 v`. Orientation defaults to horizontal.
pub fn parse_placement(
    input: &str,
    columns: usize,
    rows: usize,
) -> Result<(Coordinate, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parse_coordinate(parts.next().unwrap_or(""), columns, rows)?;
    let orientation = match parts.next().map(|p| p.to_ascii_lowercase()) {
        None => Orientation::Horizontal,
        Some(p) if p == "h" || p == "horizontal" => Orientation::Horizontal,
        Some(p) if p == "v" || p == "vertical" => Orientation::Vertical,
        Some(p) => return Err(format!("Invalid orientation '{}' - use h or v", p)),
    };
    Ok((coord, orientation))
}

fn render(board: &Gameboard, glyph: impl Fn(Coordinate, CellStatus) -> char) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..board.columns() {
        let _ = write!(out, "{:>3}", c + 1);
    }
    out.push('\n');
    for r in 0..board.rows() {
        let _ = write!(out, " {} ", row_label(r));
        for c in 0..board.columns() {
            let coord = Coordinate::new(r, c);
            let status = board.status(coord).unwrap_or_default();
            let _ = write!(out, "{:>3}", glyph(coord, status));
        }
        out.push('\n');
    }
    out
}

/// A player's own board: ships, the hits they took and incoming misses.
pub fn render_fleet_board(board: &Gameboard) -> String {
    render(board, |coord, status| match status {
        CellStatus::Ship if board.has_fired_at(coord) => 'X',
        CellStatus::Ship => 'S',
        CellStatus::Miss => 'o',
        CellStatus::Ocean => '.',
    })
}

/// A player's tracking board: what they know about the enemy waters.
pub fn render_target_board(board: &Gameboard) -> String {
    render(board, |coord, status| match status {
        CellStatus::Miss => 'o',
        _ if board.has_fired_at(coord) => 'X',
        _ => '.',
    })
}

/// Short narration of a shot's outcome.
pub fn describe_report(report: &AttackReport) -> &'static str {
    match (report.result, report.sunk) {
        (AttackResult::Hit, true) => "hit and sunk",
        (AttackResult::Hit, false) => "hit",
        (AttackResult::Miss, _) => "miss",
    }
}

/// Interactive game over any line-based input and text output.
pub struct CliGame<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> CliGame<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Give back the output, mostly so tests can inspect it.
    pub fn into_output(self) -> O {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for a position for every ship. A blank line places the rest at
    /// random; `random` rerolls the whole fleet.
    pub fn place_fleet<R: Rng>(
        &mut self,
        session: &mut GameSession,
        rng: &mut R,
    ) -> anyhow::Result<()> {
        let columns = session.config().columns;
        let rows = session.config().rows;
        writeln!(
            self.output,
            "Place your ships (e.g. A1 h, C4 v). Press enter for random placement."
        )?;
        while !session.human().fleet_placed() {
            let Some(index) = session.human().ships().iter().position(|s| !s.is_placed()) else {
                break;
            };
            let length = session.human().ships()[index].length();
            write!(self.output, "{}", render_fleet_board(session.human().ship_board()))?;
            let prompt = format!("Ship {} (length {}): ", index + 1, length);
            let Some(line) = self.read_line(&prompt)? else {
                anyhow::bail!("input closed during placement");
            };
            if line.is_empty() {
                session.place_remaining_randomly(rng)?;
                break;
            }
            if line.eq_ignore_ascii_case("random") {
                session.randomize_human_fleet(rng)?;
                continue;
            }
            match parse_placement(&line, columns, rows) {
                Ok((origin, orientation)) => {
                    if let Err(e) = session.place_human_ship(index, origin, orientation) {
                        writeln!(self.output, "Error: {}", e)?;
                    }
                }
                Err(e) => writeln!(self.output, "Invalid input: {}", e)?,
            }
        }
        write!(self.output, "{}", render_fleet_board(session.human().ship_board()))?;
        Ok(())
    }

    fn read_target(&mut self, session: &GameSession) -> anyhow::Result<Coordinate> {
        let columns = session.config().columns;
        let rows = session.config().rows;
        loop {
            let Some(line) = self.read_line("Enter target: ")? else {
                anyhow::bail!("input closed during play");
            };
            match parse_coordinate(&line, columns, rows) {
                Ok(c) if session.human().target_board().has_fired_at(c) => {
                    writeln!(self.output, "Already fired at {}", coord_to_string(c))?;
                }
                Ok(c) => return Ok(c),
                Err(e) => writeln!(self.output, "Invalid coordinate: {}", e)?,
            }
        }
    }

    fn print_view(&mut self, session: &GameSession) -> anyhow::Result<()> {
        writeln!(self.output, "\nEnemy waters:")?;
        write!(self.output, "{}", render_target_board(session.human().target_board()))?;
        writeln!(self.output, "\nYour fleet:")?;
        write!(self.output, "{}", render_fleet_board(session.human().ship_board()))?;
        Ok(())
    }

    /// Placement, then alternating shots until somebody wins.
    pub async fn run<R: Rng>(
        &mut self,
        session: &mut GameSession,
        rng: &mut R,
    ) -> anyhow::Result<GameStatus> {
        if session.status() == GameStatus::Setup {
            self.place_fleet(session, rng)?;
            session.start()?;
        }
        while session.status() == GameStatus::InProgress {
            self.print_view(session)?;
            let target = self.read_target(session)?;
            let report = session.human_attack(target)?;
            writeln!(
                self.output,
                "You fired at {}: {}",
                coord_to_string(target),
                describe_report(&report)
            )?;
            if session.status() != GameStatus::InProgress {
                break;
            }
            writeln!(self.output, "The enemy is thinking...")?;
            let report = session.cpu_turn(rng).await?;
            writeln!(
                self.output,
                "Enemy fired at {}: {}",
                coord_to_string(report.target),
                describe_report(&report)
            )?;
        }
        self.print_view(session)?;
        match session.status() {
            GameStatus::Won => writeln!(self.output, "\nVICTORY! You have sunk all enemy ships.")?,
            GameStatus::Lost => writeln!(self.output, "\nDEFEAT. All your ships have been destroyed.")?,
            _ => {}
        }
        Ok(session.status())
    }
}
