use tracing::warn;

pub const NAME_FALLBACK: &str = "N/A";
pub const STATE_FALLBACK: char = '?';
pub const COMMAND_FALLBACK: &str = "[kernel]";

/// System-wide memory counters in kilobytes. `free_kb` never exceeds
/// `total_kb`; the constructor clamps rather than trusting the kernel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryTotals {
    total_kb: u64,
    free_kb: u64,
}

impl MemoryTotals {
    pub fn new(total_kb: u64, free_kb: u64) -> Self {
        let free_kb = if free_kb > total_kb {
            warn!(total_kb, free_kb, "free memory exceeds total, clamping");
            total_kb
        } else {
            free_kb
        };
        Self { total_kb, free_kb }
    }

    pub fn total_kb(&self) -> u64 {
        self.total_kb
    }

    pub fn free_kb(&self) -> u64 {
        self.free_kb
    }

    pub fn used_kb(&self) -> u64 {
        self.total_kb - self.free_kb
    }
}

/// 1/5/15-minute run-queue averages. Unreadable values stay at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadAverages {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SystemSnapshot {
    pub memory: MemoryTotals,
    pub load: LoadAverages,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub state: char,
    pub resident_kb: u64,
    pub command: String,
}

impl ProcessRecord {
    /// Record for a PID whose detail reads all failed. Enumeration alone is
    /// enough to earn a row; every field starts at its sentinel.
    pub fn placeholder(pid: u32) -> Self {
        Self {
            pid,
            name: NAME_FALLBACK.to_string(),
            state: STATE_FALLBACK,
            resident_kb: 0,
            command: COMMAND_FALLBACK.to_string(),
        }
    }
}

/// One complete collection pass. Built fresh every cycle, handed to the
/// ranker and renderer, then dropped; nothing survives across iterations.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub system: SystemSnapshot,
    pub processes: Vec<ProcessRecord>,
}
