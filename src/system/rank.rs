use std::cmp::Reverse;

use super::snapshot::ProcessRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Memory,
    Pid,
    Name,
}

impl SortKey {
    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pid" => SortKey::Pid,
            "name" => SortKey::Name,
            _ => SortKey::Memory,
        }
    }
}

/// Sort the full set, then keep the top `limit` rows. Memory sorts
/// descending; ties on any primary key break by ascending PID so repeated
/// samples of identical data render identically.
pub fn rank(processes: &[ProcessRecord], key: SortKey, limit: usize) -> Vec<ProcessRecord> {
    let mut ranked = processes.to_vec();
    match key {
        SortKey::Memory => ranked.sort_unstable_by_key(|p| (Reverse(p.resident_kb), p.pid)),
        SortKey::Pid => ranked.sort_unstable_by_key(|p| p.pid),
        SortKey::Name => {
            ranked.sort_unstable_by(|a, b| a.name.cmp(&b.name).then(a.pid.cmp(&b.pid)));
        }
    }
    ranked.truncate(limit);
    ranked
}
