//! Display functions for command results

use crate::commands::SimulationReport;
use colored::Colorize;

/// Print a simulation report
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Rounds played:     {}", report.rounds);
    if report.rounds == 0 {
        return;
    }

    let pct = |n: usize| n as f64 / report.rounds as f64 * 100.0;
    println!(
        "  Won:               {} {}",
        report.wins,
        format!("({:.1}%)", pct(report.wins)).green()
    );
    println!(
        "  Lost:              {} {}",
        report.losses,
        format!("({:.1}%)", pct(report.losses)).red()
    );
    if report.undecided > 0 {
        println!(
            "  Undecided:         {} {}",
            report.undecided,
            format!("({:.1}%)", pct(report.undecided)).yellow()
        );
    }

    println!(
        "  Avg wrong guesses: {}",
        format!("{:.2}", report.average_wrong_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Avg reveal:        {:.1}%",
        report.average_reveal_fraction * 100.0
    );
    println!(
        "  Time:              {:.2}s ({:.0} rounds/s)",
        report.duration.as_secs_f64(),
        report.rounds_per_second
    );

    println!("\n  {}", "Wrong-guess distribution".bright_cyan().bold());
    let mut entries: Vec<(u32, usize)> = report
        .wrong_distribution
        .iter()
        .map(|(&wrong, &count)| (wrong, count))
        .collect();
    entries.sort_unstable();

    let max_count = entries.iter().map(|&(_, c)| c).max().unwrap_or(1);
    for (wrong, count) in entries {
        let bar_len = if max_count > 0 {
            (count * 30 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(30_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {wrong:3} wrong: {bar} {count:4} ({:5.1}%)", pct(count));
    }
    println!();
}
