use crate::format::{clip, kb_to_gb, kb_to_mb};
use crate::system::snapshot::{ProcessRecord, Snapshot};

/// Interior width between the two border characters. Every rendered line
/// is exactly this wide plus the borders.
pub const INTERIOR_WIDTH: usize = 86;

const TITLE: &str = "--- proctop system monitor ---";

const NAME_WIDTH: usize = 18;
const COMMAND_WIDTH: usize = 34;

/// Render one full frame. Output depends only on the snapshot and `limit`:
/// identical input produces identical bytes, and the height is constant so
/// successive redraws overwrite each other cleanly.
pub fn draw(snapshot: &Snapshot, ranked: &[ProcessRecord], limit: usize) -> String {
    let mut lines = Vec::with_capacity(limit + 9);

    lines.push(border());
    lines.push(line(&centered_title()));
    lines.push(line(""));
    lines.push(line(&summary(snapshot)));
    lines.push(line(&format!(
        " Total processes: {}",
        snapshot.processes.len()
    )));
    lines.push(line(""));
    lines.push(line(&header_row()));
    lines.push(separator());

    for record in ranked.iter().take(limit) {
        lines.push(line(&data_row(record)));
    }
    // Pad to a constant height when fewer processes exist than rows.
    for _ in ranked.len().min(limit)..limit {
        lines.push(line(""));
    }

    lines.push(border());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn border() -> String {
    format!("+{}+", "-".repeat(INTERIOR_WIDTH))
}

fn separator() -> String {
    format!("|{}|", "-".repeat(INTERIOR_WIDTH))
}

fn line(interior: &str) -> String {
    format!("|{interior:<width$}|", width = INTERIOR_WIDTH)
}

fn centered_title() -> String {
    let pad = (INTERIOR_WIDTH - TITLE.len()) / 2;
    format!("{:pad$}{TITLE}", "")
}

fn summary(snapshot: &Snapshot) -> String {
    let memory = snapshot.system.memory;
    let load = snapshot.system.load;
    let left = format!(
        " Memory: {:>7.2}G / {:>7.2}G used ({:>6.2}G free)",
        kb_to_gb(memory.used_kb()),
        kb_to_gb(memory.total_kb()),
        kb_to_gb(memory.free_kb()),
    );
    let right = format!(
        "Load avg (1/5/15): {:.2} {:.2} {:.2}",
        load.one, load.five, load.fifteen
    );
    let width = INTERIOR_WIDTH.saturating_sub(left.len() + 1);
    format!("{left}{right:>width$} ")
}

fn header_row() -> String {
    format!(
        " {:<8}{:<20}{:<4}{:>12}  {:<width$}",
        "PID",
        "NAME",
        "S",
        "MEM (MB)",
        "COMMAND",
        width = COMMAND_WIDTH + 3
    )
}

fn data_row(record: &ProcessRecord) -> String {
    let name = clip(&record.name, NAME_WIDTH, "..");
    let command = clip(&record.command, COMMAND_WIDTH, "...");
    format!(
        " {:<8}{:<20}{:<4}{:>11.1}M  {:<width$}",
        record.pid,
        name,
        record.state,
        kb_to_mb(record.resident_kb),
        command,
        width = COMMAND_WIDTH + 3
    )
}
