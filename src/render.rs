use crate::board::{Entry, Views};
use crate::config::Config;
use crate::html::render_html;
use crate::stats::RosterStats;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

/// Number of cells of a full-length bar in the text report.
pub const BAR_WIDTH: usize = 30;

/// Placeholder shown for a day without a recorded score.
pub const ABSENT: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
    Json,
}

/// One line of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    pub rank: usize,
    pub name: String,
    pub total: i64,
    pub bar_percent: f64,
}

/// One line of the detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub total: i64,
    pub average: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
    pub empty_message: Option<String>,
}

/// Fully resolved dashboard, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub period: String,
    pub stats: RosterStats,
    pub search: String,
    pub max_total: i64,
    pub top_title: String,
    pub top: Vec<RankRow>,
    pub bottom_title: String,
    pub bottom: Vec<RankRow>,
    pub table: Table,
}

impl Page {
    pub fn build(cfg: &Config, stats: RosterStats, views: &Views, search: &str) -> Self {
        Self {
            title: cfg.title.clone(),
            period: cfg.period.clone(),
            stats,
            search: search.to_string(),
            max_total: views.max_total,
            top_title: format!("Top {} Performers", cfg.top_n),
            top: rank_rows(&views.top, views.max_total),
            bottom_title: format!("Bottom {} (Needs Review)", cfg.bottom_n),
            bottom: rank_rows(&views.bottom, views.max_total),
            table: Table::build(&views.alphabetical, cfg.column_count, search),
        }
    }
}

impl Table {
    /// At least `column_count` day columns; longer rows add `D{n}` columns of their own.
    pub fn build(entries: &[Entry], column_count: usize, search: &str) -> Self {
        let column_count = entries
            .iter()
            .map(|entry| entry.picker.scores.len())
            .fold(column_count, usize::max);
        let columns = (1..=column_count).map(|day| format!("D{day}")).collect();
        let rows: Vec<TableRow> = entries
            .iter()
            .map(|entry| table_row(entry, column_count))
            .collect();
        let empty_message = rows.is_empty().then(|| empty_message(search));
        Self {
            columns,
            rows,
            empty_message,
        }
    }
}

pub fn rank_rows(entries: &[Entry], max_total: i64) -> Vec<RankRow> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| RankRow {
            rank: idx + 1,
            name: entry.name().to_string(),
            total: entry.total(),
            bar_percent: bar_percent(entry.total(), max_total),
        })
        .collect()
}

/// Bar length as a percentage of `max_total`, clamped to `0..=100`.
pub fn bar_percent(total: i64, max_total: i64) -> f64 {
    let percent = total as f64 / max_total as f64 * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn table_row(entry: &Entry, column_count: usize) -> TableRow {
    let scores = &entry.picker.scores;
    TableRow {
        name: entry.name().to_string(),
        total: entry.total(),
        average: entry.summary.average_text(),
        cells: (0..column_count)
            .map(|day| score_cell(scores.get(day).copied().unwrap_or(0)))
            .collect(),
    }
}

pub fn score_cell(score: i64) -> String {
    if score == 0 {
        ABSENT.to_string()
    } else {
        score.to_string()
    }
}

pub fn empty_message(search: &str) -> String {
    format!("No pickers found for \"{search}\"")
}

pub fn render(page: &Page, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(page)),
        Format::Html => Ok(render_html(page)),
        Format::Json => serde_json::to_string_pretty(page).context("failed to serialize page"),
    }
}

pub fn render_text(page: &Page) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{} · Performance Monitoring Dashboard", page.period);
    let _ = writeln!(
        out,
        "Pickers: {}  Total: {}  Active days: {}  Average: {}",
        page.stats.pickers,
        page.stats.total,
        page.stats.active_days,
        page.stats.average_text()
    );
    let _ = writeln!(out);

    write_ranking(&mut out, &page.top_title, &page.top);
    let _ = writeln!(out);
    write_ranking(&mut out, &page.bottom_title, &page.bottom);
    let _ = writeln!(out);

    let _ = writeln!(out, "Full Roster (A-Z)");
    out.push_str(&render_table_text(&page.table));

    out
}

fn write_ranking(out: &mut String, title: &str, rows: &[RankRow]) {
    let _ = writeln!(out, "{title}");
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let total_width = rows.iter().map(|r| r.total.to_string().len()).max().unwrap_or(0);
    for row in rows {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>total_width$}  {}",
            row.rank,
            row.name,
            row.total,
            bar(row.bar_percent)
        );
    }
}

pub fn bar(percent: f64) -> String {
    let cells = (percent / 100.0 * BAR_WIDTH as f64).round() as usize;
    "#".repeat(cells.min(BAR_WIDTH))
}

/// Detail table alone, as re-rendered on every search edit.
pub fn render_table_text(table: &Table) -> String {
    let mut out = String::new();

    let name_width = table
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain([4])
        .max()
        .unwrap_or(4);
    let cell_width = table
        .rows
        .iter()
        .flat_map(|r| r.cells.iter().map(|c| c.len()))
        .chain(table.columns.iter().map(|c| c.len()))
        .max()
        .unwrap_or(1);

    let mut header = format!("{:<name_width$}  {:>5}  {:>5}", "Name", "Total", "Avg");
    for column in &table.columns {
        let _ = write!(header, " {column:>cell_width$}");
    }
    let _ = writeln!(out, "{}", header.trim_end());

    if let Some(message) = &table.empty_message {
        let _ = writeln!(out, "{message}");
        return out;
    }

    for row in &table.rows {
        let mut line = format!(
            "{:<name_width$}  {:>5}  {:>5}",
            row.name, row.total, row.average
        );
        for cell in &row.cells {
            let _ = write!(line, " {cell:>cell_width$}");
        }
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(
        out,
        "* A dash ({ABSENT}) marks a day without a recorded score; it counts as 0."
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::data::builtin_roster;
    use crate::model::{Dataset, Picker};
    use std::sync::Arc;

    fn builtin_page(search: &str) -> Page {
        let cfg = Config::default();
        let board = Board::new(Arc::new(builtin_roster()));
        let views = board.views(search, cfg.top_n, cfg.bottom_n);
        Page::build(&cfg, board.roster_stats(), &views, search)
    }

    #[test]
    fn zero_scores_render_as_placeholder() {
        assert_eq!(score_cell(0), "-");
        assert_eq!(score_cell(17), "17");
        assert_eq!(score_cell(-3), "-3");
    }

    #[test]
    fn bar_percent_uses_shared_maximum() {
        assert_eq!(bar_percent(50, 50), 100.0);
        assert_eq!(bar_percent(30, 50), 60.0);
        assert_eq!(bar_percent(0, 0), 0.0);
        assert_eq!(bar_percent(-5, 50), 0.0);
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(100.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50.0), "#".repeat(BAR_WIDTH / 2));
        assert_eq!(bar(0.0), "");
    }

    #[test]
    fn ranks_are_sequential_positions() {
        let board = Board::new(Arc::new(Dataset::new(vec![
            Picker::new("A", vec![10]),
            Picker::new("B", vec![10]),
            Picker::new("C", vec![40]),
        ])));
        let rows = rank_rows(&board.top(3), board.max_total());
        let ranks: Vec<_> = rows.iter().map(|r| (r.rank, r.name.as_str())).collect();
        assert_eq!(ranks, vec![(1, "C"), (2, "A"), (3, "B")]);
        assert_eq!(rows[1].bar_percent, 25.0);
    }

    #[test]
    fn bottom_bars_use_roster_maximum() {
        let page = builtin_page("");
        assert_eq!(page.max_total, 184);
        assert_eq!(page.top[0].bar_percent, 100.0);
        let joshua = &page.bottom[0];
        assert_eq!(joshua.name, "JOSHUA");
        assert_eq!(joshua.bar_percent, 54.0 / 184.0 * 100.0);
    }

    #[test]
    fn table_rows_carry_cells_and_average() {
        let page = builtin_page("abdul");
        assert_eq!(page.table.columns.len(), 13);
        assert_eq!(page.table.rows.len(), 1);
        let row = &page.table.rows[0];
        assert_eq!(row.total, 159);
        assert_eq!(row.average, "15.9");
        assert_eq!(row.cells[0], "10");
        assert_eq!(row.cells[5], "-");
        assert!(page.table.empty_message.is_none());
    }

    #[test]
    fn short_rows_are_padded_with_placeholders() {
        let board = Board::new(Arc::new(Dataset::new(vec![Picker::new("A", vec![4])])));
        let table = Table::build(&board.alphabetical(""), 3, "");
        assert_eq!(table.rows[0].cells, vec!["4", "-", "-"]);
    }

    #[test]
    fn long_rows_keep_every_score() {
        let board = Board::new(Arc::new(Dataset::new(vec![
            Picker::new("A", vec![1, 2, 3, 4, 5]),
            Picker::new("B", vec![6]),
        ])));
        let table = Table::build(&board.alphabetical(""), 3, "");
        assert_eq!(table.columns, vec!["D1", "D2", "D3", "D4", "D5"]);
        assert_eq!(table.rows[0].total, 15);
        assert_eq!(table.rows[0].cells, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(table.rows[1].cells, vec!["6", "-", "-", "-", "-"]);
    }

    #[test]
    fn empty_result_names_the_search_term() {
        let page = builtin_page("zz");
        assert!(page.table.rows.is_empty());
        assert_eq!(
            page.table.empty_message.as_deref(),
            Some("No pickers found for \"zz\"")
        );
        assert!(render_text(&page).contains("No pickers found for \"zz\""));
    }

    #[test]
    fn empty_dataset_renders_without_rankings() {
        let cfg = Config::default();
        let board = Board::new(Arc::new(Dataset::default()));
        let views = board.views("", cfg.top_n, cfg.bottom_n);
        let page = Page::build(&cfg, board.roster_stats(), &views, "");
        assert!(page.top.is_empty());
        assert!(page.bottom.is_empty());
        assert_eq!(page.table.empty_message.as_deref(), Some("No pickers found for \"\""));
    }

    #[test]
    fn text_report_lists_sections() {
        let text = render_text(&builtin_page(""));
        assert!(text.contains("Top 10 Performers"));
        assert!(text.contains("Bottom 10 (Needs Review)"));
        assert!(text.contains("Full Roster (A-Z)"));
        assert!(text.contains("Average: 12.6"));
        let first_rank = text
            .lines()
            .find(|line| line.contains("REDI"))
            .unwrap_or_default();
        assert!(first_rank.contains(&"#".repeat(BAR_WIDTH)));
    }

    #[test]
    fn json_report_is_valid() {
        let json = render(&builtin_page("ri"), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["table"]["rows"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["top"][0]["name"], "REDI");
    }
}
