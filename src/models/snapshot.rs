// The aggregator's final state: one value instead of a pile of counters.

use serde::{Deserialize, Serialize};

use super::{HostStats, ProgramStatus, ServiceStats, StatusInfo};

/// Everything learned from one pass over a status dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub info: StatusInfo,
    pub program: ProgramStatus,
    pub services: ServiceStats,
    pub hosts: HostStats,
}

impl StatusSnapshot {
    /// Seconds since the dump was written, relative to `now`. Clamped at zero.
    pub fn status_file_age(&self, now: i64) -> u64 {
        now.saturating_sub(self.info.created).max(0) as u64
    }

    /// Seconds the daemon has been running, relative to `now`. Clamped at zero.
    pub fn program_running_time(&self, now: i64) -> u64 {
        now.saturating_sub(self.program.program_start).max(0) as u64
    }
}
