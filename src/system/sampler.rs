use color_eyre::Result;

use super::snapshot::{Snapshot, SystemSnapshot};
use super::source::MetricSource;

/// Assembles one consistent snapshot per call: system totals, then the PID
/// list, then one record per PID in enumeration order. Per-item reads
/// degrade on their own; only enumeration failure propagates.
pub struct Sampler<S> {
    source: S,
}

impl<S: MetricSource> Sampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn sample(&self) -> Result<Snapshot> {
        let system = SystemSnapshot {
            memory: self.source.memory_totals(),
            load: self.source.load_averages(),
        };
        let processes = self
            .source
            .enumerate_pids()?
            .into_iter()
            .map(|pid| self.source.process_record(pid))
            .collect();
        Ok(Snapshot { system, processes })
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;

    use super::*;
    use crate::system::snapshot::{LoadAverages, MemoryTotals, ProcessRecord};

    struct FakeSource {
        pids: Vec<u32>,
        fail_enumeration: bool,
    }

    impl MetricSource for FakeSource {
        fn memory_totals(&self) -> MemoryTotals {
            MemoryTotals::new(4_194_304, 1_048_576)
        }

        fn load_averages(&self) -> LoadAverages {
            LoadAverages {
                one: 0.5,
                five: 0.25,
                fifteen: 0.125,
            }
        }

        fn enumerate_pids(&self) -> Result<Vec<u32>> {
            if self.fail_enumeration {
                return Err(eyre!("cannot list process root"));
            }
            Ok(self.pids.clone())
        }

        fn process_record(&self, pid: u32) -> ProcessRecord {
            // Odd PIDs mimic processes whose detail reads all failed.
            if pid % 2 == 1 {
                ProcessRecord::placeholder(pid)
            } else {
                ProcessRecord {
                    pid,
                    name: format!("proc_{pid}"),
                    state: 'S',
                    resident_kb: u64::from(pid) * 10,
                    command: format!("/bin/proc_{pid}"),
                }
            }
        }
    }

    #[test]
    fn sample_collects_in_enumeration_order() {
        let sampler = Sampler::new(FakeSource {
            pids: vec![8, 3, 4],
            fail_enumeration: false,
        });
        let snapshot = sampler.sample().unwrap();

        assert_eq!(snapshot.system.memory.total_kb(), 4_194_304);
        let pids: Vec<u32> = snapshot.processes.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![8, 3, 4]);
    }

    #[test]
    fn degraded_records_still_appear() {
        let sampler = Sampler::new(FakeSource {
            pids: vec![2, 3],
            fail_enumeration: false,
        });
        let snapshot = sampler.sample().unwrap();

        assert_eq!(snapshot.processes.len(), 2);
        assert_eq!(snapshot.processes[1], ProcessRecord::placeholder(3));
    }

    #[test]
    fn enumeration_failure_is_the_only_error() {
        let sampler = Sampler::new(FakeSource {
            pids: vec![],
            fail_enumeration: true,
        });
        assert!(sampler.sample().is_err());
    }
}
