//! Hot-seat session: reads player input lines and drives one engine.

use super::config::CliConfig;
use super::render::render;
use derive_new::new;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, GameState, Position};
use tracing::{debug, info, instrument};

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A cell index, possibly out of range.
    Cell(i64),
    /// Start a new game.
    Reset,
    /// Print the input help.
    Help,
    /// End the session.
    Quit,
}

impl Input {
    /// Parses a line: a number, a position label, or a keyword.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if let Ok(cell) = line.parse::<i64>() {
            return Some(Input::Cell(cell));
        }
        match line.to_ascii_lowercase().as_str() {
            "reset" | "r" | "new" => Some(Input::Reset),
            "help" | "h" | "?" => Some(Input::Help),
            "quit" | "q" | "exit" => Some(Input::Quit),
            _ => Position::from_label_or_number(line).map(|pos| Input::Cell(i64::from(pos))),
        }
    }
}

const HELP: &str = "Enter a cell number (0-8) or a position such as 'center' or 'top-left'.\n\
                    'reset' starts a new game, 'quit' exits.";

/// Interactive game session between two players at one terminal.
#[derive(Debug, new)]
pub struct Session<'a> {
    config: &'a CliConfig,
    #[new(default)]
    engine: GameEngine,
}

impl Session<'_> {
    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Reads lines from `input` until `quit` or end of input.
    ///
    /// Every line produces output: the re-rendered board, a rejection
    /// notice, or help text.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        writeln!(output, "{}", render(self.state(), self.config)?)?;
        write!(output, "{}", self.config.prompt())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "{}", self.config.prompt())?;
                output.flush()?;
                continue;
            }

            match Input::parse(&line) {
                Some(Input::Quit) => {
                    info!("Player quit");
                    break;
                }
                Some(input) => self.handle(input, &mut output)?,
                None => writeln!(output, "Unrecognized input '{}'. Type 'help'.", line.trim())?,
            }
            write!(output, "{}", self.config.prompt())?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    fn handle(&mut self, input: Input, output: &mut impl Write) -> anyhow::Result<()> {
        debug!(?input, "Handling input");
        match input {
            Input::Cell(cell) => {
                if let Err(rejection) = self.engine.try_move(cell) {
                    writeln!(output, "Move rejected: {}", rejection)?;
                }
                writeln!(output, "{}", render(self.state(), self.config)?)?;
                if self.state().is_over() {
                    writeln!(output, "Type 'reset' to play again or 'quit' to exit.")?;
                }
            }
            Input::Reset => {
                self.engine.reset();
                writeln!(output, "{}", render(self.state(), self.config)?)?;
            }
            Input::Help => writeln!(output, "{}", HELP)?,
            Input::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inputs() {
        assert_eq!(Input::parse("4"), Some(Input::Cell(4)));
        assert_eq!(Input::parse(" -1 "), Some(Input::Cell(-1)));
        assert_eq!(Input::parse("Center"), Some(Input::Cell(4)));
        assert_eq!(Input::parse("bottom left"), Some(Input::Cell(6)));
        assert_eq!(Input::parse("RESET"), Some(Input::Reset));
        assert_eq!(Input::parse("q"), Some(Input::Quit));
        assert_eq!(Input::parse("banana"), None);
    }
}
