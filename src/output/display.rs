//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, RoundRecord, SimulationResult};
use crate::solver::entropy::GuessScore;
use crate::solver::{PuzzleState, Status};
use crate::wordlists::Corpus;
use colored::Colorize;

/// Candidates listed per puzzle before eliding the rest
const CANDIDATE_PREVIEW: usize = 8;

/// Print one line per puzzle: status, remaining count and known letters
pub fn print_board(puzzles: &[PuzzleState], corpus: &Corpus) {
    for puzzle in puzzles {
        let id = format!("#{:<2}", puzzle.id());
        match puzzle.status() {
            Status::Solved => {
                let answer = puzzle
                    .solution(corpus)
                    .map_or_else(|| "?????".to_string(), ToString::to_string);
                println!("  {} {} {}", id.bright_black(), "solved".green(), answer.green().bold());
            }
            Status::Active => {
                let remaining = puzzle.remaining_count();
                let mut line = format!(
                    "  {} {:>5} left  {}",
                    id.bright_cyan(),
                    remaining,
                    puzzle.constraints()
                );
                if remaining <= CANDIDATE_PREVIEW {
                    let words: Vec<String> = puzzle
                        .candidates()
                        .words(corpus)
                        .map(ToString::to_string)
                        .collect();
                    line.push_str(&format!("  [{}]", words.join(" ")));
                }
                println!("{line}");
            }
        }
    }
}

/// Print the recommendation and the runners-up
pub fn print_recommendation(best: &GuessScore, alternatives: &[GuessScore]) {
    println!(
        "\n📊 Suggested guess: {}  {}",
        best.word.to_string().bright_yellow().bold(),
        format!("{:.3} bits", best.score).bright_white()
    );
    let others: Vec<String> = alternatives
        .iter()
        .filter(|alt| alt.word != best.word)
        .map(|alt| format!("{} {:.2}", alt.word, alt.score))
        .collect();
    if !others.is_empty() {
        println!("   Alternatives:    {}", others.join(", ").bright_black());
    }
}

/// Print one simulated round
pub fn print_round(round: &RoundRecord) {
    println!(
        "\n{} {}  {}",
        format!("Round {:>2}:", round.number).bright_cyan().bold(),
        round.guess.to_string().bright_yellow().bold(),
        format!("{:.3} bits", round.score).bright_black()
    );
    for &(id, pattern) in &round.feedback {
        let mark = if pattern.is_perfect() { " ✓" } else { "" };
        println!(
            "   #{id:<2} {} {}{mark}",
            colored_guess(&round.guess, pattern),
            pattern_to_emoji(pattern)
        );
    }
    println!("   {} puzzles still active", round.active_after);
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    for round in &result.rounds {
        print_round(round);
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (index, (target, solved)) in result.targets.iter().zip(&result.solved_in).enumerate() {
        let outcome = solved.map_or_else(
            || "unsolved".red().to_string(),
            |round| format!("round {round}").green().to_string(),
        );
        println!("   #{:<2} {}  {outcome}", index + 1, target);
    }

    println!();
    println!("   Rounds played:    {}", result.rounds.len());
    println!(
        "   Puzzles solved:   {}/{}",
        result.solved_count(),
        result.targets.len()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.complete {
        println!(
            "\n{}",
            format!("✅ All puzzles solved in {} rounds!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!("❌ Stopped after {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_guess_list {
        println!("\n{}", "⚠ not in the guess list".yellow());
    }

    println!("\n📊 Against {} active puzzles:", result.puzzles.len());
    println!(
        "   Aggregate:   {}",
        format!("{:.3} bits", result.aggregate).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain per puzzle",
        result.mean_expected_remaining()
    );

    println!("\n📈 {}", "Per puzzle:".bright_cyan().bold());
    for puzzle in &result.puzzles {
        let ceiling = (puzzle.candidates.max(1) as f64).log2();
        let bar = entropy_bar(puzzle.metrics.entropy, ceiling.max(1.0), 20);
        println!(
            "   #{:<2} [{}] {:.3} bits  {} buckets, worst {} of {}",
            puzzle.puzzle,
            bar.green(),
            puzzle.metrics.entropy,
            puzzle.metrics.buckets,
            puzzle.metrics.max_partition,
            puzzle.candidates
        );
    }
}
