// Single-pass aggregation of status records into a StatusSnapshot.
// O(1) work per record; nothing from earlier blocks is retained beyond the
// running statistics themselves.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::models::{ProgramStatus, StateTally, StatusSnapshot, TargetStats};
use crate::status_file::{
    Block, BlockKind, CheckRecord, CheckType, InfoRecord, ProgramRecord, Record, StatusEvent,
    StatusReader,
};

/// Folds blocks into a [`StatusSnapshot`]. One writer, no sharing.
#[derive(Debug, Default)]
pub struct Aggregator {
    snapshot: StatusSnapshot,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a freshly opened host or service entry. Other kinds are no-ops.
    pub fn open(&mut self, kind: BlockKind) {
        match kind {
            BlockKind::Host => self.snapshot.hosts.entries += 1,
            BlockKind::Service => self.snapshot.services.entries += 1,
            BlockKind::Info | BlockKind::Program => {}
        }
    }

    /// Folds one closed block in. `reference_time` (unix seconds) anchors the
    /// recency windows. Ingesting the same block twice counts it twice.
    pub fn ingest(&mut self, block: &Block, reference_time: i64) {
        match block.record() {
            Record::Info(info) => self.apply_info(info),
            Record::Program(program) => apply_program(&mut self.snapshot.program, &program),
            Record::Host(check) => apply_check(&mut self.snapshot.hosts, &check, reference_time),
            Record::Service(check) => {
                apply_check(&mut self.snapshot.services, &check, reference_time)
            }
        }
    }

    /// Routes one reader event.
    pub fn apply(&mut self, event: &StatusEvent, reference_time: i64) {
        match event {
            StatusEvent::Opened(kind) => self.open(*kind),
            StatusEvent::Closed(block) => self.ingest(block, reference_time),
        }
    }

    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    pub fn finish(self) -> StatusSnapshot {
        self.snapshot
    }

    fn apply_info(&mut self, info: InfoRecord) {
        if let Some(created) = info.created {
            self.snapshot.info.created = created;
        }
        if let Some(version) = info.version {
            self.snapshot.info.version = Some(version);
        }
    }
}

fn apply_program(program: &mut ProgramStatus, record: &ProgramRecord) {
    fn set<T: Copy>(slot: &mut T, value: Option<T>) {
        if let Some(v) = value {
            *slot = v;
        }
    }

    set(&mut program.program_start, record.program_start);
    set(&mut program.pid, record.pid);
    set(&mut program.command_buffer.total, record.total_command_buffer_slots);
    set(&mut program.command_buffer.used, record.used_command_buffer_slots);
    set(&mut program.command_buffer.high, record.high_command_buffer_slots);
    set(&mut program.check_result_buffer.total, record.total_check_result_buffer_slots);
    set(&mut program.check_result_buffer.used, record.used_check_result_buffer_slots);
    set(&mut program.check_result_buffer.high, record.high_check_result_buffer_slots);

    let hosts = &mut program.host_checks;
    set(&mut hosts.active_scheduled, record.active_scheduled_host_checks);
    set(&mut hosts.active_ondemand, record.active_ondemand_host_checks);
    set(&mut hosts.cached, record.cached_host_checks);
    set(&mut hosts.passive, record.passive_host_checks);
    set(&mut hosts.parallel, record.parallel_host_checks);
    set(&mut hosts.serial, record.serial_host_checks);

    let services = &mut program.service_checks;
    set(&mut services.active_scheduled, record.active_scheduled_service_checks);
    set(&mut services.active_ondemand, record.active_ondemand_service_checks);
    set(&mut services.cached, record.cached_service_checks);
    set(&mut services.passive, record.passive_service_checks);

    set(&mut program.external_commands, record.external_commands);

    debug!(pid = program.pid, "program status updated");
}

fn apply_check<S: StateTally>(stats: &mut TargetStats<S>, check: &CheckRecord, now: i64) {
    // Averaged over every entry opened so far, not only closed blocks.
    stats.state_change.push_over(check.state_change, stats.entries);

    // None when the timestamp is too far out to yield an age at all.
    let age = now.checked_sub(check.last_check);
    match check.check_type {
        CheckType::Active => {
            stats.active_checks += 1;
            let active = &mut stats.active;
            active.latency.push(check.latency);
            active.execution_time.push(check.execution_time);
            active.state_change.push(check.state_change);
            if let Some(age) = age {
                active.windows.record_age(age);
            }
        }
        CheckType::Passive => {
            stats.passive_checks += 1;
            let passive = &mut stats.passive;
            passive.latency.push(check.latency);
            passive.state_change.push(check.state_change);
            if let Some(age) = age {
                passive.windows.record_age(age);
            }
        }
    }

    stats.states.record(check.current_state);
    if check.is_flapping {
        stats.flapping += 1;
    }
    if check.in_downtime() {
        stats.in_downtime += 1;
    }
    if check.has_been_checked {
        stats.checked += 1;
    }
    if check.should_be_scheduled {
        stats.scheduled += 1;
    }
}

/// Runs a reader to exhaustion. Any read error aborts the pass; no partial
/// snapshot is returned.
pub fn aggregate<R: BufRead>(reader: StatusReader<R>, reference_time: i64) -> Result<StatusSnapshot> {
    let mut aggregator = Aggregator::new();
    for event in reader {
        aggregator.apply(&event?, reference_time);
    }
    let snapshot = aggregator.finish();
    debug!(
        hosts = snapshot.hosts.entries,
        services = snapshot.services.entries,
        "status stream aggregated"
    );
    Ok(snapshot)
}

/// Opens and aggregates a status file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_status_file(path: &Path, reference_time: i64) -> Result<StatusSnapshot> {
    let snapshot = aggregate(StatusReader::open(path)?, reference_time)?;
    info!(
        hosts = snapshot.hosts.entries,
        services = snapshot.services.entries,
        "status file read"
    );
    Ok(snapshot)
}
