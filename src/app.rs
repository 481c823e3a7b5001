use std::io::{Write, stdout};
use std::time::Duration;

use color_eyre::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::config::Config;
use crate::system::rank::{SortKey, rank};
use crate::system::sampler::Sampler;
use crate::system::source::MetricSource;
use crate::ui;

/// Drives sample -> rank -> render -> clear-and-print -> sleep, forever.
/// Nothing is carried between iterations; each frame comes from a fresh
/// snapshot. The only way out of the loop is the fatal enumeration error.
pub struct App<S> {
    sampler: Sampler<S>,
    sort_key: SortKey,
    display_rows: usize,
    refresh_rate: Duration,
}

impl<S: MetricSource> App<S> {
    pub fn new(config: &Config, source: S) -> Self {
        Self {
            sampler: Sampler::new(source),
            sort_key: SortKey::from_str_config(&config.general.default_sort),
            display_rows: config.table.display_rows,
            refresh_rate: Duration::from_millis(config.general.refresh_rate_ms),
        }
    }

    /// One full pass rendered to a frame. Errors only when the process root
    /// cannot be enumerated.
    pub fn frame(&self) -> Result<String> {
        let snapshot = self.sampler.sample()?;
        let ranked = rank(&snapshot.processes, self.sort_key, self.display_rows);
        Ok(ui::draw(&snapshot, &ranked, self.display_rows))
    }

    /// The delay is best-effort: each cycle lasts the refresh rate plus
    /// whatever sampling and rendering cost, with no compensation.
    pub async fn run(&self) -> Result<()> {
        loop {
            let frame = self.frame()?;
            let mut out = stdout();
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            out.write_all(frame.as_bytes())?;
            out.flush()?;
            tokio::time::sleep(self.refresh_rate).await;
        }
    }
}
