//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

use super::config::SimConfig;
use super::runner::{RunStats, STAGE_BANDS};
use crate::core::constants::ARCHETYPE_BAND_SIZE;
use crate::encounter::Ladder;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub ladder: Ladder,
    pub target_stage: u32,
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_highest_cleared: f64,
    pub avg_final_level: f64,
    pub avg_battles: f64,
    pub avg_defeats: f64,
    pub avg_level_ups: f64,
    pub avg_evolutions: f64,
    pub avg_points: f64,
    pub partial_awards: u32,

    // Distribution data
    pub cleared_distribution: BTreeMap<u32, u32>,
    pub avg_defeats_per_band: Vec<f64>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    runs.iter().map(f).sum::<f64>() / runs.len().max(1) as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.reached_target && r.total_battles >= config.max_battles_per_run)
            .count() as u32;

        let mut cleared_distribution = BTreeMap::new();
        for run in &runs {
            *cleared_distribution.entry(run.highest_cleared).or_insert(0) += 1;
        }

        let avg_defeats_per_band = (0..STAGE_BANDS)
            .map(|band| {
                average(&runs, |r| {
                    r.defeats_per_band.get(band).copied().unwrap_or(0) as f64
                })
            })
            .collect();

        Self {
            ladder: config.ladder,
            target_stage: config.target_stage,
            num_runs,
            runs_completed,
            runs_timed_out,
            avg_highest_cleared: average(&runs, |r| r.highest_cleared as f64),
            avg_final_level: average(&runs, |r| r.average_level),
            avg_battles: average(&runs, |r| r.total_battles as f64),
            avg_defeats: average(&runs, |r| r.total_defeats as f64),
            avg_level_ups: average(&runs, |r| r.total_level_ups as f64),
            avg_evolutions: average(&runs, |r| r.evolutions as f64),
            avg_points: average(&runs, |r| r.points_earned as f64),
            partial_awards: runs.iter().map(|r| r.partial_awards).sum(),
            cleared_distribution,
            avg_defeats_per_band,
            run_stats: runs,
        }
    }

    pub fn completion_rate(&self) -> f64 {
        self.runs_completed as f64 / self.num_runs.max(1) as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} timed out ({} to {})\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out, self.ladder, self.target_stage
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Highest Cleared: {:.1}\n",
            self.avg_highest_cleared
        ));
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Level-ups:       {:.1}\n", self.avg_level_ups));
        report.push_str(&format!("  Avg Evolutions:      {:.2}\n", self.avg_evolutions));
        report.push_str(&format!("  Avg Points:          {:.0}\n\n", self.avg_points));

        report.push_str("── BATTLES ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Battles:         {:.1}\n", self.avg_battles));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n\n", self.avg_defeats));

        report.push_str("── DEFEATS BY BAND ───────────────────────────────────────────────\n");
        for (band, defeats) in self.avg_defeats_per_band.iter().enumerate() {
            if *defeats <= 0.0 {
                continue;
            }
            let start = band as u32 * ARCHETYPE_BAND_SIZE + 1;
            let end = start + ARCHETYPE_BAND_SIZE - 1;
            let bar: String = "█".repeat((*defeats as usize).min(40));
            report.push_str(&format!(
                "  {:3}-{:3}: {:>6.1} {}\n",
                start, end, defeats, bar
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.avg_defeats < 1.0 {
            "TOO EASY - Party never loses"
        } else if self.avg_defeats < 20.0 {
            "GOOD - Challenging but fair"
        } else if self.avg_defeats < 100.0 {
            "HARD - Heavy grinding required"
        } else {
            "TOO HARD - Ladder is a wall"
        };
        report.push_str(&format!("  Completion Rate: {:.1}%\n", self.completion_rate()));
        report.push_str(&format!("  Defeat Rating:   {}\n", rating));
        if self.partial_awards > 0 {
            report.push_str(&format!(
                "  ⚠️  {} awards hit the level-up ceiling\n",
                self.partial_awards
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cleared: u32, defeats: u32, reached: bool) -> RunStats {
        let mut defeats_per_band = vec![0; STAGE_BANDS];
        defeats_per_band[0] = defeats;
        RunStats {
            highest_cleared: cleared,
            average_level: 30.0,
            total_battles: cleared + defeats,
            total_wins: cleared,
            total_defeats: defeats,
            total_level_ups: 10,
            evolutions: 0,
            points_earned: cleared as u64 * 100,
            partial_awards: 0,
            reached_target: reached,
            defeats_per_band,
        }
    }

    #[test]
    fn test_report_generation() {
        let config = SimConfig {
            target_stage: 50,
            max_battles_per_run: 60,
            ..Default::default()
        };
        let report = SimReport::from_runs(vec![run(50, 4, true), run(30, 30, false)], &config);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_completed, 1);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.avg_highest_cleared - 40.0).abs() < 1e-9);
        assert!((report.avg_defeats_per_band[0] - 17.0).abs() < 1e-9);
        assert!((report.completion_rate() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_and_json_output() {
        let config = SimConfig::default();
        let report = SimReport::from_runs(vec![run(100, 2, true)], &config);
        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("Completion Rate: 100.0%"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert!(json.get("run_stats").is_none());
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), &SimConfig::default());
        assert_eq!(report.avg_highest_cleared, 0.0);
        assert_eq!(report.completion_rate(), 0.0);
    }
}
