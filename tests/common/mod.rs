// Shared test helpers

#![allow(dead_code)]

use nagstats::aggregator::aggregate;
use nagstats::models::StatusSnapshot;
use nagstats::status_file::StatusReader;

/// Reference time used by most fixtures.
pub const NOW: i64 = 1_700_000_000;

/// A `servicestatus` block with the given body lines.
pub fn service_block(fields: &[&str]) -> String {
    block("servicestatus", fields)
}

/// A `hoststatus` block with the given body lines.
pub fn host_block(fields: &[&str]) -> String {
    block("hoststatus", fields)
}

pub fn block(kind: &str, fields: &[&str]) -> String {
    let mut out = format!("{kind} {{\n");
    for f in fields {
        out.push('\t');
        out.push_str(f);
        out.push('\n');
    }
    out.push_str("\t}\n\n");
    out
}

/// Runs the reader and aggregator over an in-memory dump.
pub fn aggregate_str(input: &str, now: i64) -> StatusSnapshot {
    aggregate(StatusReader::new(input.as_bytes()), now).expect("aggregate")
}

/// A small but complete dump: info, program, two hosts, three services.
pub fn sample_dump(now: i64) -> String {
    let mut s = String::from("# status file\n");
    s += &block(
        "info",
        &[&format!("created={}", now - 5), "version=4.4.6"],
    );
    s += &block(
        "programstatus",
        &[
            "nagios_pid=4242",
            &format!("program_start={}", now - 90_061),
            "total_external_command_buffer_slots=4096",
            "used_external_command_buffer_slots=3",
            "high_external_command_buffer_slots=17",
            "active_scheduled_host_check_stats=4,10,30",
            "active_ondemand_host_check_stats=1,2,3",
            "parallel_host_check_stats=5,12,33",
            "serial_host_check_stats=0,0,0",
            "cached_host_check_stats=2,2,2",
            "passive_host_check_stats=0,1,1",
            "active_scheduled_service_check_stats=20,100,300",
            "active_ondemand_service_check_stats=0,0,1",
            "passive_service_check_stats=3,9,27",
            "external_command_stats=1,5,15",
        ],
    );
    s += &host_block(&[
        "host_name=web01",
        "current_state=0",
        "check_type=0",
        "check_latency=0.100",
        "check_execution_time=1.000",
        "percent_state_change=0.00",
        &format!("last_check={}", now - 30),
    ]);
    s += &host_block(&[
        "host_name=db01",
        "current_state=1",
        "check_type=0",
        "check_latency=0.300",
        "check_execution_time=3.000",
        "percent_state_change=10.00",
        "is_flapping=1",
        &format!("last_check={}", now - 400),
    ]);
    s += &service_block(&[
        "host_name=web01",
        "service_description=HTTP",
        "current_state=0",
        "check_type=0",
        "check_latency=0.250",
        "check_execution_time=0.500",
        "percent_state_change=5.00",
        &format!("last_check={}", now - 10),
    ]);
    s += &service_block(&[
        "host_name=web01",
        "service_description=DISK",
        "current_state=2",
        "check_type=0",
        "check_latency=0.750",
        "check_execution_time=1.500",
        "percent_state_change=15.00",
        "scheduled_downtime_depth=1",
        &format!("last_check={}", now - 1000),
    ]);
    s += &service_block(&[
        "host_name=db01",
        "service_description=TRAP",
        "current_state=1",
        "check_type=1",
        "check_latency=0.050",
        "percent_state_change=25.00",
        "should_be_scheduled=0",
        &format!("last_check={}", now - 120),
    ]);
    s
}
