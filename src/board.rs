use crate::model::{Dataset, Picker};
use crate::stats::{RosterStats, Summary, summarize};
use std::{cmp::Ordering, sync::Arc};

/// A picker together with its aggregated summary.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub picker: &'a Picker,
    pub summary: &'a Summary,
}

impl Entry<'_> {
    pub fn name(&self) -> &str {
        &self.picker.name
    }

    pub fn total(&self) -> i64 {
        self.summary.total
    }
}

/// Projections of the board handed to the presenter.
pub struct Views<'a> {
    pub alphabetical: Vec<Entry<'a>>,
    pub top: Vec<Entry<'a>>,
    pub bottom: Vec<Entry<'a>>,
    pub max_total: i64,
}

/// Aggregated roster with cached orderings.
///
/// Summaries and orderings are computed once per dataset allocation;
/// queries only slice or filter the cached index lists.
pub struct Board {
    dataset: Arc<Dataset>,
    summaries: Vec<Summary>,
    by_name: Vec<usize>,
    by_total_desc: Vec<usize>,
    by_total_asc: Vec<usize>,
    max_total: i64,
    generation: u64,
}

impl Board {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let mut board = Self {
            dataset: Arc::new(Dataset::default()),
            summaries: Vec::new(),
            by_name: Vec::new(),
            by_total_desc: Vec::new(),
            by_total_asc: Vec::new(),
            max_total: 0,
            generation: 0,
        };
        board.refresh(dataset);
        board
    }

    /// Cache invalidation entry point: point the board at `dataset`,
    /// rebuilding only if it is a different allocation.
    ///
    /// Returns `true` if the cache was rebuilt.
    pub fn refresh(&mut self, dataset: Arc<Dataset>) -> bool {
        if Arc::ptr_eq(&self.dataset, &dataset) {
            return false;
        }
        self.dataset = dataset;
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        let pickers = &self.dataset.pickers;
        self.summaries = pickers.iter().map(summarize).collect();

        let summaries = &self.summaries;
        let idxs: Vec<usize> = (0..pickers.len()).collect();

        let mut by_name = idxs.clone();
        by_name.sort_by(|&a, &b| compare_names(&pickers[a].name, &pickers[b].name));

        // Stable sorts: equal totals stay in declaration order.
        let mut by_total_desc = idxs.clone();
        by_total_desc.sort_by(|&a, &b| summaries[b].total.cmp(&summaries[a].total));
        let mut by_total_asc = idxs;
        by_total_asc.sort_by_key(|&i| summaries[i].total);

        self.max_total = summaries.iter().map(|s| s.total).max().unwrap_or(0);
        self.by_name = by_name;
        self.by_total_desc = by_total_desc;
        self.by_total_asc = by_total_asc;
        self.generation += 1;

        log::debug!(
            "aggregated {} pickers (generation {})",
            pickers.len(),
            self.generation
        );
    }

    /// Number of times the aggregation has run.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn entry(&self, idx: usize) -> Entry<'_> {
        Entry {
            picker: &self.dataset.pickers[idx],
            summary: &self.summaries[idx],
        }
    }

    /// Roster ordered by name, keeping names that contain `filter` case-insensitively.
    pub fn alphabetical(&self, filter: &str) -> Vec<Entry<'_>> {
        let needle = filter.to_lowercase();
        self.by_name
            .iter()
            .map(|&idx| self.entry(idx))
            .filter(|entry| needle.is_empty() || entry.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// The `n` highest totals, highest first.
    pub fn top(&self, n: usize) -> Vec<Entry<'_>> {
        self.by_total_desc
            .iter()
            .take(n)
            .map(|&idx| self.entry(idx))
            .collect()
    }

    /// The `n` lowest totals, lowest first.
    pub fn bottom(&self, n: usize) -> Vec<Entry<'_>> {
        self.by_total_asc
            .iter()
            .take(n)
            .map(|&idx| self.entry(idx))
            .collect()
    }

    /// Largest total over the whole roster, `0` when empty.
    pub fn max_total(&self) -> i64 {
        self.max_total
    }

    pub fn roster_stats(&self) -> RosterStats {
        RosterStats::from_summaries(&self.summaries)
    }

    pub fn views(&self, filter: &str, top_n: usize, bottom_n: usize) -> Views<'_> {
        Views {
            alphabetical: self.alphabetical(filter),
            top: self.top(top_n),
            bottom: self.bottom(bottom_n),
            max_total: self.max_total,
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Interactive view over a [`Board`] owning the current search text.
pub struct Session<'a> {
    board: &'a Board,
    search: String,
    rows: Vec<Entry<'a>>,
}

impl<'a> Session<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            search: String::new(),
            rows: board.alphabetical(""),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text, re-filtering the alphabetical rows if it changed.
    pub fn set_search(&mut self, search: &str) {
        if self.search == search {
            return;
        }
        self.search = search.to_string();
        self.rows = self.board.alphabetical(&self.search);
    }

    pub fn rows(&self) -> &[Entry<'a>] {
        &self.rows
    }
}
