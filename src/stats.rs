use crate::model::Picker;
use crate::utils::round_ratio;
use serde::{Deserialize, Serialize};

/// Aggregated view of one picker's scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of all scores, absent days included as zero.
    pub total: i64,
    /// Number of scores strictly greater than zero.
    pub active_days: usize,
    /// `total / active_days` to one decimal, or `0.0` without active days.
    pub average: f64,
}

impl Summary {
    /// Average as displayed: `"0"` without active days, one decimal otherwise.
    pub fn average_text(&self) -> String {
        if self.active_days == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average)
        }
    }
}

pub fn summarize(picker: &Picker) -> Summary {
    let total = picker
        .scores
        .iter()
        .fold(0_i64, |acc, &score| acc.saturating_add(score));
    let active_days = picker.scores.iter().filter(|&&score| score > 0).count();
    Summary {
        total,
        active_days,
        average: average_over(total, active_days),
    }
}

fn average_over(total: i64, active_days: usize) -> f64 {
    if active_days == 0 {
        return 0.0;
    }
    round_ratio(total, active_days)
}

pub struct RosterAccumulator {
    n_pickers: usize,
    total: i64,
    active_days: usize,
}

/// Headline figures for the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosterStats {
    pub pickers: usize,
    pub total: i64,
    pub active_days: usize,
    pub average: f64,
}

impl RosterAccumulator {
    pub fn new() -> Self {
        Self {
            n_pickers: 0,
            total: 0,
            active_days: 0,
        }
    }

    pub fn add(&mut self, summary: &Summary) {
        self.n_pickers += 1;
        self.total = self.total.saturating_add(summary.total);
        self.active_days += summary.active_days;
    }

    pub fn report(&self) -> RosterStats {
        RosterStats {
            pickers: self.n_pickers,
            total: self.total,
            active_days: self.active_days,
            average: average_over(self.total, self.active_days),
        }
    }
}

impl RosterStats {
    pub fn from_summaries(summaries: &[Summary]) -> Self {
        let mut acc = RosterAccumulator::new();
        for summary in summaries {
            acc.add(summary);
        }
        acc.report()
    }

    pub fn average_text(&self) -> String {
        if self.active_days == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.average)
        }
    }
}
