//! # Gilded Rose Simulator
//!
//! Ages the fixture inventory day by day and prints what the shelf looks like
//! at the start of each day.
//!
//! ## Usage
//! ```bash
//! # Two days, revised rules, text output (defaults)
//! cargo run -p gilded-sim
//!
//! # Thirty days under the legacy rules, as JSON lines
//! cargo run -p gilded-sim -- --days 30 --rules legacy --format json
//!
//! # Watch every item transition
//! RUST_LOG=gilded_core=trace cargo run -p gilded-sim
//! ```
//!
//! Snapshots go to stdout; logs go to stderr.

mod config;
mod fixture;
mod render;

use std::env;
use std::io::{self, Write};

use gilded_core::Inventory;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Command, OutputFormat, SimConfig, HELP};
use crate::fixture::fixture_items;
use crate::render::DaySnapshot;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match SimConfig::from_env()?.apply_args(&args)? {
        Command::Help => {
            println!("{HELP}");
            return Ok(());
        }
        Command::Run(config) => config,
    };

    info!(
        days = config.days,
        rule_set = %config.rule_set,
        format = ?config.format,
        "Starting simulation"
    );

    let mut inventory = Inventory::with_rule_set(fixture_items(), config.rule_set);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    simulate(&mut inventory, &config, &mut out)?;

    info!(items = inventory.len(), "Simulation complete");
    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Writes one snapshot per day, then advances the inventory.
fn simulate<W: Write>(
    inventory: &mut Inventory,
    config: &SimConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    for day in 0..config.days {
        let snapshot = DaySnapshot::new(day, inventory.items());
        match config.format {
            OutputFormat::Text => out.write_all(snapshot.to_text().as_bytes())?,
            OutputFormat::Json => writeln!(out, "{}", snapshot.to_json()?)?,
        }
        inventory.update_quality();
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gilded_core::RuleSet;

    fn run(config: &SimConfig) -> String {
        let mut inventory = Inventory::with_rule_set(fixture_items(), config.rule_set);
        let mut out = Vec::new();
        simulate(&mut inventory, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_two_day_text_output() {
        let output = run(&SimConfig::default());
        let expected = "\
-------- day 0 --------
name, sellIn, quality
+5 Dexterity Vest, 10, 20
Aged Brie, 2, 0
Elixir of the Mongoose, 5, 7
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 15, 20
Backstage passes to a TAFKAL80ETC concert, 10, 49
Backstage passes to a TAFKAL80ETC concert, 5, 49
Conjured Mana Cake, 3, 6

-------- day 1 --------
name, sellIn, quality
+5 Dexterity Vest, 9, 19
Aged Brie, 1, 1
Elixir of the Mongoose, 4, 6
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 14, 21
Backstage passes to a TAFKAL80ETC concert, 9, 50
Backstage passes to a TAFKAL80ETC concert, 4, 50
Conjured Mana Cake, 2, 4

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_json_output_one_line_per_day() {
        let config = SimConfig {
            days: 4,
            rule_set: RuleSet::Legacy,
            format: OutputFormat::Json,
        };
        let output = run(&config);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);

        let last: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
        assert_eq!(last["day"], 3);
        assert_eq!(last["items"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_zero_days_prints_nothing() {
        let config = SimConfig {
            days: 0,
            ..SimConfig::default()
        };
        assert!(run(&config).is_empty());
    }
}
