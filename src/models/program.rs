// Status dump metadata: info block and program block.

use serde::{Deserialize, Serialize};

use super::RecentActivity;

/// From the `info` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    /// When the daemon wrote the dump (unix seconds).
    pub created: i64,
    pub version: Option<String>,
}

/// Slot usage of one of the daemon's fixed-size buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferUsage {
    pub total: i64,
    pub used: i64,
    pub high: i64,
}

/// From the `program` block. Only one is expected; later values overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramStatus {
    pub program_start: i64,
    pub pid: i64,
    pub command_buffer: BufferUsage,
    pub check_result_buffer: BufferUsage,
    pub host_checks: HostCheckActivity,
    pub service_checks: ServiceCheckActivity,
    pub external_commands: RecentActivity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCheckActivity {
    pub active_scheduled: RecentActivity,
    pub active_ondemand: RecentActivity,
    pub cached: RecentActivity,
    pub passive: RecentActivity,
    pub parallel: RecentActivity,
    pub serial: RecentActivity,
}

impl HostCheckActivity {
    /// Checks that actually executed. Cached results were on-demand requests
    /// answered without running anything, so they are left out.
    pub fn active_total(&self) -> RecentActivity {
        self.active_scheduled + self.active_ondemand
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCheckActivity {
    pub active_scheduled: RecentActivity,
    pub active_ondemand: RecentActivity,
    pub cached: RecentActivity,
    pub passive: RecentActivity,
}

impl ServiceCheckActivity {
    pub fn active_total(&self) -> RecentActivity {
        self.active_scheduled + self.active_ondemand
    }
}
