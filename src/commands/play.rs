//! Interactive play mode
//!
//! Text-based assistant for a live game: suggests a guess each round and reads
//! back the feedback shown on every unsolved board.

use crate::core::Word;
use crate::output::formatters::scoring_progress;
use crate::output::{print_board, print_recommendation};
use crate::solver::{Response, Session, SolverError};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Guesses allowed in a sedecordle game
pub const PLAY_ROUNDS: usize = 21;

/// Runners-up shown next to the recommendation
const ALTERNATIVES: usize = 5;

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Every puzzle solved after this many rounds
    Complete { rounds: usize },
    /// The round limit was reached first
    OutOfRounds,
    /// The user quit or input ended
    Quit,
}

/// Run the interactive loop, reading answers from `input`
///
/// Each round lists the boards, recommends a guess and then asks for the
/// feedback of every active puzzle. Malformed or contradictory feedback is
/// reported and asked for again.
///
/// # Errors
///
/// Returns an error on I/O failure or if the session cannot score guesses.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<R: BufRead>(
    session: &mut Session<'_>,
    input: &mut R,
    max_rounds: usize,
) -> Result<PlayOutcome> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Sedecordle Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses that tell you the most about all boards at once.");
    println!("After each guess, enter the feedback for every unsolved board:\n");
    println!("  - C/G/🟩 for correct position");
    println!("  - P/Y/🟨 for present elsewhere");
    println!("  - A/-/⬜ for absent");
    println!("  - or 'solved' if the board was solved\n");
    println!("Press Enter to play the suggestion, or type the word you played. 'quit' exits.\n");

    while !session.is_session_complete() {
        if session.rounds_completed() >= max_rounds {
            println!(
                "\n{}",
                format!("❌ Out of guesses after {max_rounds} rounds").red().bold()
            );
            return Ok(PlayOutcome::OutOfRounds);
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}: {} of {} puzzles active",
            session.rounds_completed() + 1,
            session.active_count(),
            session.puzzles().len()
        );
        println!("────────────────────────────────────────────────────────────");
        print_board(session.puzzles(), session.corpus());

        let pb = scoring_progress(session.search_space());
        let ranked = session.top_guesses_with_progress(ALTERNATIVES, &|| pb.inc(1))?;
        pb.finish_and_clear();

        let best = session
            .finishing_guess()
            .or_else(|| ranked.first().copied())
            .ok_or(SolverError::EmptyCorpus)?;
        print_recommendation(&best, &ranked);

        let guess = loop {
            let Some(line) = prompt(input, &format!("Guess played [{}]", best.word))? else {
                return Ok(PlayOutcome::Quit);
            };
            if line.is_empty() {
                break best.word;
            }
            if is_quit(&line) {
                return Ok(PlayOutcome::Quit);
            }
            match Word::new(&line) {
                Ok(word) => break word,
                Err(e) => println!("❌ {e}\n"),
            }
        };

        session.start_round(guess)?;
        let pending = session
            .current_round()
            .map(|round| round.pending().to_vec())
            .unwrap_or_default();

        for id in pending {
            loop {
                let Some(line) = prompt(input, &format!("  #{id:<2} feedback"))? else {
                    return Ok(PlayOutcome::Quit);
                };
                if is_quit(&line) {
                    return Ok(PlayOutcome::Quit);
                }

                let response = match line.parse::<Response>() {
                    Ok(response) => response,
                    Err(e) => {
                        println!("  ❌ {e}");
                        continue;
                    }
                };

                match session.apply_feedback(id, response) {
                    Ok(puzzle) => {
                        if !puzzle.is_active() {
                            println!("  {}", format!("✓ puzzle {id} solved").green());
                        }
                        break;
                    }
                    Err(e @ SolverError::InconsistentFeedback { .. }) => {
                        println!("  ❌ {e}, check the board and try again");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    let rounds = session.rounds_completed();
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉  S E D E C O R D L E   S O L V E D !  🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  All {} puzzles solved in {} rounds\n",
        session.puzzles().len(),
        rounds.to_string().bright_cyan().bold()
    );
    print_board(session.puzzles(), session.corpus());

    Ok(PlayOutcome::Complete { rounds })
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Read one trimmed line, `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
