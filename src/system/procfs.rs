use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing::{debug, warn};

use super::snapshot::{LoadAverages, MemoryTotals, ProcessRecord};
use super::source::MetricSource;

/// Metric source backed by a procfs-style directory tree. The root is a
/// parameter so tests (and containers exposing a guest procfs elsewhere)
/// can point it at an arbitrary tree.
pub struct ProcfsSource {
    root: PathBuf,
}

impl ProcfsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_text(&self, rel: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(rel)).ok()
    }
}

impl Default for ProcfsSource {
    fn default() -> Self {
        Self::new("/proc")
    }
}

impl MetricSource for ProcfsSource {
    fn memory_totals(&self) -> MemoryTotals {
        match self.read_text("meminfo") {
            Some(contents) => parse_meminfo(&contents),
            None => {
                warn!("meminfo unavailable, reporting zero memory");
                MemoryTotals::default()
            }
        }
    }

    fn load_averages(&self) -> LoadAverages {
        match self.read_text("loadavg") {
            Some(contents) => parse_loadavg(&contents),
            None => {
                warn!("loadavg unavailable, reporting zero load");
                LoadAverages::default()
            }
        }
    }

    fn enumerate_pids(&self) -> Result<Vec<u32>> {
        let entries = std::fs::read_dir(&self.root)
            .wrap_err_with(|| format!("cannot list process root {}", self.root.display()))?;

        let mut pids = Vec::new();
        for entry in entries.flatten() {
            if !entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str()
                && let Some(pid) = parse_pid_name(name)
            {
                pids.push(pid);
            }
        }
        Ok(pids)
    }

    fn process_record(&self, pid: u32) -> ProcessRecord {
        let mut record = ProcessRecord::placeholder(pid);

        // Both reads race against process exit; a PID that vanished since
        // enumeration simply keeps its sentinel fields.
        match self.read_text(&format!("{pid}/status")) {
            Some(contents) => apply_status(&mut record, &contents),
            None => debug!(pid, "status unreadable, keeping defaults"),
        }

        if let Ok(bytes) = std::fs::read(self.root.join(format!("{pid}/cmdline")))
            && let Some(command) = cmdline_display(&bytes)
        {
            record.command = command;
        }

        record
    }
}

/// Digit-only directory names under the root are PIDs; everything else
/// (`meminfo`, `sys`, `self`, ...) is not.
fn parse_pid_name(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// Second whitespace-delimited token of a `KEY: value unit` line, as kB.
fn parse_kb_value(line: &str) -> Option<u64> {
    line.split_whitespace().nth(1)?.parse().ok()
}

pub fn parse_meminfo(contents: &str) -> MemoryTotals {
    let mut total_kb = 0;
    let mut free_kb = 0;
    for line in contents.lines() {
        if line.starts_with("MemTotal:") {
            total_kb = parse_kb_value(line).unwrap_or(0);
        } else if line.starts_with("MemFree:") {
            free_kb = parse_kb_value(line).unwrap_or(0);
        }
    }
    MemoryTotals::new(total_kb, free_kb)
}

pub fn parse_loadavg(contents: &str) -> LoadAverages {
    let first_line = contents.lines().next().unwrap_or("");
    let mut tokens = first_line.split_whitespace();
    let mut next = || tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0.0);
    LoadAverages {
        one: next(),
        five: next(),
        fifteen: next(),
    }
}

fn apply_status(record: &mut ProcessRecord, contents: &str) {
    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix("Name:") {
            let name = rest.trim_start();
            if !name.is_empty() {
                record.name = name.to_string();
            }
        } else if let Some(rest) = line.strip_prefix("State:") {
            if let Some(state) = rest.split_whitespace().next().and_then(|t| t.chars().next()) {
                record.state = state;
            }
        } else if line.starts_with("VmRSS:") {
            record.resident_kb = parse_kb_value(line).unwrap_or(0);
        }
    }
}

/// NUL-delimited argv bytes as one display string, or `None` when the
/// resource is empty (kernel threads expose an empty cmdline).
pub fn cmdline_display(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes).replace('\0', " ");
    let text = text.trim_end();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
