//! Automated round simulation
//!
//! Plays many rounds with a guesser that tries the alphabet in random order,
//! and reports outcome statistics. Useful for sanity-checking an error
//! budget or a custom word list.

use crate::core::{GameConfig, GameSession, Outcome, SecretWord, shuffle};
use crate::wordlists;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of one simulated round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub wrong_guesses: u32,
    pub reveal_fraction: f64,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationReport {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    /// Rounds where the guesser exhausted the alphabet without a decision
    /// (possible when the word contains characters off the keyboard)
    pub undecided: usize,
    pub average_wrong_guesses: f64,
    pub average_reveal_fraction: f64,
    pub wrong_distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play one round with a random-order alphabet guesser
fn play_round(words: &[SecretWord], config: &GameConfig, seed: u64) -> Option<RoundResult> {
    let mut rng = StdRng::seed_from_u64(seed);

    let word = wordlists::draw(words, &mut rng)?.clone();
    let mut session = GameSession::new(word, config.clone(), &mut rng);

    let guess_order = shuffle(&config.alphabet, &mut rng);
    for &letter in &guess_order {
        if session.outcome().is_over() {
            break;
        }
        session.guess(letter);
    }

    Some(RoundResult {
        outcome: session.outcome(),
        wrong_guesses: session.wrong_guesses(),
        reveal_fraction: session.reveal_fraction(),
    })
}

/// Run `rounds` simulated rounds in parallel
///
/// Deterministic for a fixed `seed`: each round derives its own RNG from the
/// base seed, so the parallel schedule cannot affect results.
pub fn run_simulation(
    words: &[SecretWord],
    config: &GameConfig,
    rounds: usize,
    seed: Option<u64>,
) -> SimulationReport {
    let base_seed = seed.unwrap_or_else(|| rand::rng().random());

    let pb = ProgressBar::new(rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<RoundResult> = (0..rounds)
        .into_par_iter()
        .filter_map(|round| {
            let result = play_round(words, config, base_seed.wrapping_add(round as u64));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let duration = start.elapsed();

    let wins = results
        .iter()
        .filter(|r| r.outcome == Outcome::Won)
        .count();
    let losses = results
        .iter()
        .filter(|r| r.outcome == Outcome::Lost)
        .count();
    let undecided = results.len() - wins - losses;

    let mut wrong_distribution: HashMap<u32, usize> = HashMap::new();
    for result in &results {
        *wrong_distribution.entry(result.wrong_guesses).or_insert(0) += 1;
    }

    let total = results.len();
    let average_wrong_guesses = if total > 0 {
        results.iter().map(|r| f64::from(r.wrong_guesses)).sum::<f64>() / total as f64
    } else {
        0.0
    };
    let average_reveal_fraction = if total > 0 {
        results.iter().map(|r| r.reveal_fraction).sum::<f64>() / total as f64
    } else {
        0.0
    };

    SimulationReport {
        rounds: total,
        wins,
        losses,
        undecided,
        average_wrong_guesses,
        average_reveal_fraction,
        wrong_distribution,
        duration,
        rounds_per_second: total as f64 / duration.as_secs_f64(),
    }
}
