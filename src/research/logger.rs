//! Colored terminal output for experiments.
use colored::Colorize;

use crate::constants::{WIDTH, FULL_WIDTH, STAT_WIDTH};


/// Prints the settings of an experiment.
/// Each entry of `sections` is a name, its value,
/// and optional sub-parameters.
pub(crate) fn print_stats(sections: &[(&str, String, Vec<(&str, String)>)]) {
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "STATS".bold(), "",
    );
    println!("\n{header}");

    for (name, value, info) in sections {
        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            name.bold(),
            value.bold().green(),
        );
        let line = info.iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        if !line.is_empty() { println!("{line}"); }
    }
    println!("{:=^FULL_WIDTH$}\n", "".bold());
}


/// Prints the column names of [`print_round`].
pub(crate) fn print_log_header() {
    println!(
        "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
        "".bold().red(),
        "PRUNED".bold().green(),
        "UNPRUNED".bold().yellow(),
    );
    println!(
        "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
        "ROUND".bold().red(),
        "TEST ACC.".bold().green(),
        "TEST ACC.".bold().yellow(),
    );
}


/// Prints the test accuracies of one round.
pub(crate) fn print_round(round: usize, with_pruning: f64, without_pruning: f64) {
    println!(
        "      {:>WIDTH$}\t{:>WIDTH$.5}\t{:>WIDTH$.5}",
        round.to_string().red(),
        with_pruning,
        without_pruning,
    );
}


/// Prints the average test accuracies.
pub(crate) fn print_summary(train_size: usize, with_pruning: f64, without_pruning: f64) {
    println!(
        "{}    {}    {}",
        format!("  [TRAIN {train_size:>WIDTH$}]").bold().red(),
        format!("[WITH PRUNING {with_pruning:>WIDTH$.5}]").bold().green(),
        format!("[WITHOUT {without_pruning:>WIDTH$.5}]").bold().yellow(),
    );
}
