//! HTML report generation
//!
//! Renders a [`Page`] as a self-contained HTML document with embedded CSS.

use crate::render::{ABSENT, Page, RankRow, Table};

/// Render a page as a standalone HTML document
pub fn render_html(page: &Page) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        <div class="grid">
            {top}
            {bottom}
        </div>
        {table}
    </div>
</body>
</html>"#,
        title = html_escape(&page.title),
        css = inline_css(),
        header = render_header(page),
        top = render_ranking(&page.top_title, &page.top, "top"),
        bottom = render_ranking(&page.bottom_title, &page.bottom, "bottom"),
        table = render_table(&page.table, &page.search),
    )
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; color: #0f172a; background: #f8fafc; }
.container { max-width: 1280px; margin: 0 auto; padding: 2rem; }
header { margin-bottom: 1.5rem; }
header h1 { font-size: 1.75rem; font-weight: 700; }
header .meta { color: #64748b; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem; margin-bottom: 1.5rem; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 0.75rem; padding: 1.5rem; }
.card h2 { font-size: 1rem; margin-bottom: 1rem; }
.rank { display: flex; align-items: center; gap: 1rem; margin-bottom: 0.75rem; }
.rank .pos { width: 2rem; text-align: center; font-weight: 700; color: #475569; }
.rank .body { flex-grow: 1; }
.rank .line { display: flex; justify-content: space-between; }
.track { height: 0.5rem; background: #f1f5f9; border-radius: 9999px; overflow: hidden; }
.fill { height: 100%; border-radius: 9999px; }
.top .fill { background: #6366f1; }
.bottom .fill { background: #fb7185; }
table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
th, td { padding: 0.5rem 0.75rem; text-align: center; border-bottom: 1px solid #f1f5f9; }
th:first-child, td:first-child { text-align: left; font-weight: 600; }
td.absent { color: #cbd5e1; }
.empty { padding: 2rem; color: #64748b; }
.note { margin-top: 1rem; font-size: 0.75rem; color: #94a3b8; text-align: right; }
"#
}

fn render_header(page: &Page) -> String {
    let stats = &page.stats;
    format!(
        r#"<header>
            <h1>{title}</h1>
            <p class="meta">{period} · Performance Monitoring Dashboard</p>
            <p class="meta">Pickers: {pickers} · Total: {total} · Active days: {days} · Average: {average}</p>
        </header>"#,
        title = html_escape(&page.title),
        period = html_escape(&page.period),
        pickers = stats.pickers,
        total = stats.total,
        days = stats.active_days,
        average = stats.average_text(),
    )
}

fn render_ranking(title: &str, rows: &[RankRow], kind: &str) -> String {
    let items: String = rows
        .iter()
        .map(|row| {
            format!(
                r#"<div class="rank">
                <div class="pos">{rank}</div>
                <div class="body">
                    <div class="line"><span>{name}</span><strong>{total}</strong></div>
                    <div class="track"><div class="fill" style="width: {percent:.1}%"></div></div>
                </div>
            </div>"#,
                rank = row.rank,
                name = html_escape(&row.name),
                total = row.total,
                percent = row.bar_percent,
            )
        })
        .collect();

    format!(
        r#"<section class="card {kind}">
            <h2>{title}</h2>
            {items}
        </section>"#,
        title = html_escape(title),
    )
}

fn render_table(table: &Table, search: &str) -> String {
    let columns: String = table
        .columns
        .iter()
        .map(|c| format!("<th>{}</th>", html_escape(c)))
        .collect();

    let body = match &table.empty_message {
        Some(message) => format!(
            r#"<tr><td class="empty" colspan="{span}">{message}</td></tr>"#,
            span = table.columns.len() + 3,
            message = html_escape(message),
        ),
        None => table
            .rows
            .iter()
            .map(|row| {
                let cells: String = row
                    .cells
                    .iter()
                    .map(|cell| {
                        if cell == ABSENT {
                            format!(r#"<td class="absent">{ABSENT}</td>"#)
                        } else {
                            format!("<td>{}</td>", html_escape(cell))
                        }
                    })
                    .collect();
                format!(
                    "<tr><td>{}</td><td><strong>{}</strong></td><td>{}</td>{}</tr>",
                    html_escape(&row.name),
                    row.total,
                    html_escape(&row.average),
                    cells
                )
            })
            .collect(),
    };

    format!(
        r#"<section class="card">
            <h2>Full Roster (A-Z){filter}</h2>
            <table>
                <thead><tr><th>Name</th><th>Total</th><th>Average</th>{columns}</tr></thead>
                <tbody>{body}</tbody>
            </table>
            <p class="note">* A dash ({ABSENT}) marks a day without a recorded score; it counts as 0.</p>
        </section>"#,
        filter = if search.is_empty() {
            String::new()
        } else {
            format!(" · search: {}", html_escape(search))
        },
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
