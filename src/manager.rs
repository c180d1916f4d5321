use crate::board::{Board, Session};
use crate::config::Config;
use crate::data::{builtin_roster, inspect_dataset, load_dataset};
use crate::model::Dataset;
use crate::render::{Format, Page, Table, render, render_table_text};
use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
    sync::Arc,
};

/// Command that ends a browse session.
const QUIT: &str = ":q";

pub struct Manager {
    cfg: Config,
    board: Board,
}

impl Manager {
    pub fn new(data_file: Option<&Path>, config_file: Option<&Path>) -> Result<Self> {
        let cfg = match config_file {
            Some(file) => Config::from_file(file).context("failed to construct cfg")?,
            None => Config::default(),
        };
        log::info!("{cfg:#?}");

        let dataset = match data_file {
            Some(file) => load_dataset(file).context("failed to load dataset")?,
            None => builtin_roster(),
        };
        if dataset.is_empty() {
            log::warn!("roster is empty");
        }
        let n_flagged = inspect_dataset(&dataset, cfg.column_count);
        log::info!("loaded {} pickers ({n_flagged} flagged)", dataset.len());

        Ok(Self::with_dataset(cfg, Arc::new(dataset)))
    }

    pub fn with_dataset(cfg: Config, dataset: Arc<Dataset>) -> Self {
        let board = Board::new(dataset);
        Self { cfg, board }
    }

    pub fn page(&self, search: &str) -> Page {
        let views = self.board.views(search, self.cfg.top_n, self.cfg.bottom_n);
        Page::build(&self.cfg, self.board.roster_stats(), &views, search)
    }

    pub fn write_report<W: Write>(
        &self,
        search: &str,
        format: Format,
        out: Option<&Path>,
        stdout: W,
    ) -> Result<()> {
        let report = render(&self.page(search), format).context("failed to render report")?;

        match out {
            Some(file) => {
                fs::write(file, report).with_context(|| format!("failed to write {file:?}"))?;
                log::info!("wrote {file:?}");
            }
            None => write_all(stdout, &report)?,
        }

        Ok(())
    }

    /// Re-render the detail table after every line of `input`.
    ///
    /// Each line replaces the search text; an empty line clears it.
    pub fn browse<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let mut session = Session::new(&self.board);
        self.write_table(&session, &mut output)?;

        for line in input.lines() {
            let line = line.context("failed to read search text")?;
            let search = line.trim_end_matches('\r');
            if search == QUIT {
                break;
            }

            session.set_search(search);
            log::debug!("search {:?}: {} rows", session.search(), session.rows().len());
            self.write_table(&session, &mut output)?;
        }

        output.flush().context("failed to flush output")?;

        Ok(())
    }

    fn write_table<W: Write>(&self, session: &Session, output: &mut W) -> Result<()> {
        let table = Table::build(session.rows(), self.cfg.column_count, session.search());
        let text = render_table_text(&table);
        writeln!(output, "{text}").context("failed to write table")?;
        write!(output, "search> ").context("failed to write prompt")?;
        output.flush().context("failed to flush output")?;
        Ok(())
    }
}

fn write_all<W: Write>(mut writer: W, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .context("failed to write report")?;
    writer.flush().context("failed to flush writer stream")?;
    Ok(())
}
