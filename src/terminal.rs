//! Line-oriented terminal front end.
//!
//! Reads one command per line, forwards moves and resets to the session,
//! and re-renders from the session's accessors after every change.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strictly_rps::{GameSession, Move, MoveSource, Outcome, RULES};
use tracing::{debug, info, instrument, warn};

/// A parsed line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a round.
    Play(Move),
    /// Clear scores and history.
    Reset,
    /// Show total games and win rate.
    Stats,
    /// Show recent rounds.
    History,
    /// Show the rules.
    Rules,
    /// Show available commands.
    Help,
    /// Leave the game.
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let word = line.trim().to_ascii_lowercase();
        match word.as_str() {
            "reset" => Ok(Command::Reset),
            "stats" => Ok(Command::Stats),
            "history" => Ok(Command::History),
            "rules" => Ok(Command::Rules),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Move::from_str(&word)
                .map(Command::Play)
                .map_err(|_| format!("Unknown command: {}", line.trim())),
        }
    }
}

const HELP: &str = "\
Commands:
  rock | paper | scissors (or r | p | s)  play a round
  reset                                   clear scores and history
  stats                                   total games and win rate
  history                                 recent rounds
  rules                                   how to play
  quit                                    leave the game";

/// Formats a win rate percentage: `0%` before any game, else one decimal.
pub fn format_win_rate<S: MoveSource>(session: &GameSession<S>) -> String {
    if session.total_games() == 0 {
        "0%".to_string()
    } else {
        format!("{:.1}%", session.win_rate_percent())
    }
}

/// Interactive game over a reader and a writer.
#[derive(Debug)]
pub struct Terminal<S> {
    session: GameSession<S>,
    history_window: usize,
}

impl<S: MoveSource> Terminal<S> {
    /// Creates a terminal front end over `session`.
    pub fn new(session: GameSession<S>, history_window: usize) -> Self {
        Self {
            session,
            history_window,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        info!("Terminal session started");
        writeln!(output, "✂️ Rock Paper Scissors ✂️")?;
        writeln!(output, "Type a move to play, or 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, &mut output)?,
                Err(e) => {
                    warn!(input = %line.trim(), "Rejected terminal input");
                    writeln!(output, "{}", e)?;
                }
            }
        }

        self.render_stats(&mut output)?;
        writeln!(output, "Thanks for playing!")?;
        info!(total_games = self.session.total_games(), "Terminal session ended");
        Ok(())
    }

    fn execute(&mut self, command: Command, output: &mut impl Write) -> io::Result<()> {
        debug!(?command, "Executing command");
        match command {
            Command::Play(player_move) => {
                let round = self.session.play(player_move);
                let prefix = match round.outcome() {
                    Outcome::PlayerWin => "🎉",
                    Outcome::ComputerWin => "😔",
                    Outcome::Tie => "🤝",
                };
                writeln!(
                    output,
                    "You chose {} {} | Computer chose {} {}",
                    round.player_move().emoji(),
                    round.player_move(),
                    round.computer_move().emoji(),
                    round.computer_move()
                )?;
                writeln!(output, "{} {}", prefix, round.message())?;
                self.render_scores(output)
            }
            Command::Reset => {
                self.session.reset();
                writeln!(output, "Game reset! All scores cleared.")?;
                self.render_scores(output)
            }
            Command::Stats => self.render_stats(output),
            Command::History => self.render_history(output),
            Command::Rules => writeln!(output, "{}", RULES),
            Command::Help => writeln!(output, "{}", HELP),
            Command::Quit => Ok(()),
        }
    }

    fn render_scores(&self, output: &mut impl Write) -> io::Result<()> {
        writeln!(
            output,
            "👤 Player: {}  🤖 Computer: {}  🤝 Ties: {}",
            self.session.player_score(),
            self.session.computer_score(),
            self.session.tie_count()
        )
    }

    fn render_stats(&self, output: &mut impl Write) -> io::Result<()> {
        writeln!(
            output,
            "Total Games: {}  Win Rate: {}",
            self.session.total_games(),
            format_win_rate(&self.session)
        )
    }

    fn render_history(&self, output: &mut impl Write) -> io::Result<()> {
        let recent = self.session.recent_history(self.history_window);
        if recent.is_empty() {
            return writeln!(output, "No games played yet!");
        }
        for round in recent {
            writeln!(output, "{}", round.summary())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("rock".parse::<Command>(), Ok(Command::Play(Move::Rock)));
        assert_eq!(" P ".parse::<Command>(), Ok(Command::Play(Move::Paper)));
        assert_eq!("RESET".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert!("lizard".parse::<Command>().is_err());
    }

    #[test]
    fn test_format_win_rate() {
        let mut session = GameSession::with_source(strictly_rps::FixedMove(Move::Rock));
        assert_eq!(format_win_rate(&session), "0%");
        session.play(Move::Paper);
        session.play(Move::Paper);
        session.play(Move::Scissors);
        assert_eq!(format_win_rate(&session), "66.7%");
    }
}
