use color_eyre::Result;

use super::snapshot::{LoadAverages, MemoryTotals, ProcessRecord};

/// One sampling backend. Every operation except `enumerate_pids` degrades
/// to default values instead of failing, so a vanished process or an
/// unreadable counter can never abort a pass. An unlistable process root is
/// the single fatal condition: it means the environment itself is unusable.
pub trait MetricSource {
    fn memory_totals(&self) -> MemoryTotals;

    fn load_averages(&self) -> LoadAverages;

    fn enumerate_pids(&self) -> Result<Vec<u32>>;

    fn process_record(&self, pid: u32) -> ProcessRecord;
}
