// Typed views over raw blocks. Each variant carries only the fields its
// block kind defines; missing or malformed values fall back to defaults.

use super::lenient::{parse_f64, parse_flag, parse_i64, parse_triple};
use super::{Block, BlockKind};
use crate::models::RecentActivity;

/// A closed block, decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Info(InfoRecord),
    Program(ProgramRecord),
    Host(CheckRecord),
    Service(CheckRecord),
}

impl Record {
    pub fn from_block(block: &Block) -> Self {
        match block.kind {
            BlockKind::Info => Record::Info(InfoRecord::from_block(block)),
            BlockKind::Program => Record::Program(ProgramRecord::from_block(block)),
            BlockKind::Host => Record::Host(CheckRecord::from_block(block)),
            BlockKind::Service => Record::Service(CheckRecord::from_block(block)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoRecord {
    pub created: Option<i64>,
    pub version: Option<String>,
}

impl InfoRecord {
    fn from_block(block: &Block) -> Self {
        InfoRecord {
            created: block.get("created").map(parse_i64),
            version: block.get("version").map(str::to_string),
        }
    }
}

/// Program block fields. `None` means the dump did not mention the field and
/// whatever was known before is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramRecord {
    pub program_start: Option<i64>,
    pub pid: Option<i64>,
    pub total_command_buffer_slots: Option<i64>,
    pub used_command_buffer_slots: Option<i64>,
    pub high_command_buffer_slots: Option<i64>,
    pub total_check_result_buffer_slots: Option<i64>,
    pub used_check_result_buffer_slots: Option<i64>,
    pub high_check_result_buffer_slots: Option<i64>,
    pub active_scheduled_host_checks: Option<RecentActivity>,
    pub active_ondemand_host_checks: Option<RecentActivity>,
    pub cached_host_checks: Option<RecentActivity>,
    pub passive_host_checks: Option<RecentActivity>,
    pub parallel_host_checks: Option<RecentActivity>,
    pub serial_host_checks: Option<RecentActivity>,
    pub active_scheduled_service_checks: Option<RecentActivity>,
    pub active_ondemand_service_checks: Option<RecentActivity>,
    pub cached_service_checks: Option<RecentActivity>,
    pub passive_service_checks: Option<RecentActivity>,
    pub external_commands: Option<RecentActivity>,
}

impl ProgramRecord {
    fn from_block(block: &Block) -> Self {
        let int = |key: &str| block.get(key).map(parse_i64);
        let activity = |key: &str| {
            block.get(key).map(|v| {
                let [a, b, c] = parse_triple(v);
                RecentActivity::new(a, b, c)
            })
        };
        ProgramRecord {
            program_start: int("program_start"),
            pid: int("nagios_pid"),
            total_command_buffer_slots: int("total_external_command_buffer_slots"),
            used_command_buffer_slots: int("used_external_command_buffer_slots"),
            high_command_buffer_slots: int("high_external_command_buffer_slots"),
            total_check_result_buffer_slots: int("total_check_result_buffer_slots"),
            used_check_result_buffer_slots: int("used_check_result_buffer_slots"),
            high_check_result_buffer_slots: int("high_check_result_buffer_slots"),
            active_scheduled_host_checks: activity("active_scheduled_host_check_stats"),
            active_ondemand_host_checks: activity("active_ondemand_host_check_stats"),
            cached_host_checks: activity("cached_host_check_stats"),
            passive_host_checks: activity("passive_host_check_stats"),
            parallel_host_checks: activity("parallel_host_check_stats"),
            serial_host_checks: activity("serial_host_check_stats"),
            active_scheduled_service_checks: activity("active_scheduled_service_check_stats"),
            active_ondemand_service_checks: activity("active_ondemand_service_check_stats"),
            cached_service_checks: activity("cached_service_check_stats"),
            passive_service_checks: activity("passive_service_check_stats"),
            external_commands: activity("external_command_stats"),
        }
    }
}

/// How a check result arrived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckType {
    #[default]
    Active,
    Passive,
}

impl CheckType {
    /// `0` is active; any other value is treated as passive.
    pub fn from_raw(raw: i64) -> Self {
        if raw == 0 {
            CheckType::Active
        } else {
            CheckType::Passive
        }
    }
}

/// Host or service status block. Identical layout for both kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRecord {
    pub execution_time: f64,
    pub latency: f64,
    pub state_change: f64,
    pub check_type: CheckType,
    pub current_state: i64,
    pub is_flapping: bool,
    pub downtime_depth: i64,
    pub last_check: i64,
    pub has_been_checked: bool,
    pub should_be_scheduled: bool,
}

impl Default for CheckRecord {
    fn default() -> Self {
        CheckRecord {
            execution_time: 0.0,
            latency: 0.0,
            state_change: 0.0,
            check_type: CheckType::Active,
            current_state: 0,
            is_flapping: false,
            downtime_depth: 0,
            last_check: 0,
            has_been_checked: true,
            should_be_scheduled: true,
        }
    }
}

impl CheckRecord {
    pub fn from_block(block: &Block) -> Self {
        let d = CheckRecord::default();
        CheckRecord {
            execution_time: block
                .get("check_execution_time")
                .map_or(d.execution_time, parse_f64),
            latency: block.get("check_latency").map_or(d.latency, parse_f64),
            state_change: block
                .get("percent_state_change")
                .map_or(d.state_change, parse_f64),
            check_type: block
                .get("check_type")
                .map_or(d.check_type, |v| CheckType::from_raw(parse_i64(v))),
            current_state: block.get("current_state").map_or(d.current_state, parse_i64),
            is_flapping: block.get("is_flapping").map_or(d.is_flapping, parse_flag),
            downtime_depth: block
                .get("scheduled_downtime_depth")
                .map_or(d.downtime_depth, parse_i64),
            last_check: block.get("last_check").map_or(d.last_check, parse_i64),
            has_been_checked: block
                .get("has_been_checked")
                .map_or(d.has_been_checked, parse_flag),
            should_be_scheduled: block
                .get("should_be_scheduled")
                .map_or(d.should_be_scheduled, parse_flag),
        }
    }

    pub fn in_downtime(&self) -> bool {
        self.downtime_depth > 0
    }
}
