use crate::error::Result;
use crate::models::{FetchOutcome, StarResult};
use colored::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Star totals keyed by normalized repo, summed additively across sources.
///
/// A repo appearing in several sources accumulates each source's count
/// again rather than being deduplicated to a single observation.
#[derive(Debug, Default)]
pub struct AggregateReport {
    totals: HashMap<String, i64>,
    order: Vec<String>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one source's observation for a repo key.
    pub fn add(&mut self, key: String, stars: i64) {
        match self.totals.entry(key) {
            Entry::Occupied(mut occupied) => {
                *occupied.get_mut() += stars;
            }
            Entry::Vacant(vacant) => {
                self.order.push(vacant.key().clone());
                vacant.insert(stars);
            }
        }
    }

    /// Fold one source's fetch results in; excluded repos are skipped.
    pub fn add_results(&mut self, results: &[StarResult]) {
        for result in results {
            if let FetchOutcome::Stars(stars) = result.outcome {
                self.add(result.repo.key(), stars);
            }
        }
    }

    /// Rank all repos by total stars, descending. The sort is stable, so
    /// ties keep their first-discovery order.
    pub fn into_ranked(self) -> Vec<(String, i64)> {
        let AggregateReport { mut totals, order } = self;

        let mut ranked: Vec<(String, i64)> = order
            .into_iter()
            .filter_map(|key| totals.remove(&key).map(|stars| (key, stars)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Print the top-N table to stdout.
pub fn print_report(ranked: &[(String, i64)], top: usize) {
    println!();
    println!(
        "{}",
        format!("Top {} GitHub repositories by star count:", top).bold()
    );
    println!();
    println!(
        "{:<5} {:<50} {:<10} {:<60}",
        "Rank", "Repository", "Stars", "URL"
    );
    println!("{}", "-".repeat(125).dimmed());

    for (i, (repo, stars)) in ranked.iter().take(top).enumerate() {
        println!(
            "{:<5} {:<50} {:<10} {:<60}",
            format!("{}.", i + 1),
            repo,
            format_thousands(*stars),
            format!("https://github.com/{}", repo)
        );
    }
}

/// Write every ranked entry as `url,stars` lines, replacing any existing
/// file content.
pub fn write_full_report(path: &Path, ranked: &[(String, i64)]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (repo, stars) in ranked {
        writeln!(writer, "https://github.com/{},{}", repo, stars)?;
    }
    writer.flush()?;

    println!("Full rankings written to -> {}", path.display());
    Ok(())
}

/// Format an integer with comma thousands separators.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    if value < 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}
