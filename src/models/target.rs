// Per-target (host or service) check statistics and state tallies.

use serde::{Deserialize, Serialize};

use super::{CheckWindows, RunningStat};

/// Per-state counters for one target kind. `record` takes the raw
/// `current_state` integer from the status dump; unknown values are dropped.
pub trait StateTally: Default {
    fn record(&mut self, raw_state: i64);

    /// Entries in a non-OK state.
    fn problems(&self) -> u64;
}

/// Service states, numbered as the daemon writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(ServiceState::Ok),
            1 => Some(ServiceState::Warning),
            2 => Some(ServiceState::Critical),
            3 => Some(ServiceState::Unknown),
            _ => None,
        }
    }
}

/// Host states, numbered as the daemon writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Up,
    Down,
    Unreachable,
}

impl HostState {
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(HostState::Up),
            1 => Some(HostState::Down),
            2 => Some(HostState::Unreachable),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStates {
    pub ok: u64,
    pub warning: u64,
    pub unknown: u64,
    pub critical: u64,
}

impl StateTally for ServiceStates {
    fn record(&mut self, raw_state: i64) {
        match ServiceState::from_raw(raw_state) {
            Some(ServiceState::Ok) => self.ok += 1,
            Some(ServiceState::Warning) => self.warning += 1,
            Some(ServiceState::Critical) => self.critical += 1,
            Some(ServiceState::Unknown) => self.unknown += 1,
            None => {}
        }
    }

    fn problems(&self) -> u64 {
        self.warning + self.unknown + self.critical
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostStates {
    pub up: u64,
    pub down: u64,
    pub unreachable: u64,
}

impl StateTally for HostStates {
    fn record(&mut self, raw_state: i64) {
        match HostState::from_raw(raw_state) {
            Some(HostState::Up) => self.up += 1,
            Some(HostState::Down) => self.down += 1,
            Some(HostState::Unreachable) => self.unreachable += 1,
            None => {}
        }
    }

    fn problems(&self) -> u64 {
        self.down + self.unreachable
    }
}

/// Statistics restricted to actively executed checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCheckStats {
    pub latency: RunningStat,
    pub execution_time: RunningStat,
    pub state_change: RunningStat,
    pub windows: CheckWindows,
}

/// Statistics restricted to passively submitted results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassiveCheckStats {
    pub latency: RunningStat,
    pub state_change: RunningStat,
    pub windows: CheckWindows,
}

/// Everything aggregated for one target kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetStats<S> {
    /// Blocks opened so far, counted at the open marker.
    pub entries: u64,
    pub active_checks: u64,
    pub passive_checks: u64,
    /// Percent state change across active and passive checks.
    pub state_change: RunningStat,
    pub active: ActiveCheckStats,
    pub passive: PassiveCheckStats,
    pub states: S,
    pub flapping: u64,
    pub in_downtime: u64,
    pub checked: u64,
    pub scheduled: u64,
}

pub type ServiceStats = TargetStats<ServiceStates>;
pub type HostStats = TargetStats<HostStates>;
