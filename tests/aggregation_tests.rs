// Aggregation tests: running statistics, windows, tallies, stream edge cases

use nagstats::aggregator::{Aggregator, read_status_file};
use nagstats::models::StateTally;
use nagstats::status_file::{Block, BlockKind};

mod common;
use common::{NOW, aggregate_str, host_block, service_block};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_host_state_change_mean_min_max() {
    let input: String = [0.0, 10.0, 20.0, 50.0]
        .iter()
        .map(|v| host_block(&[&format!("percent_state_change={v}")]))
        .collect();
    let s = aggregate_str(&input, NOW);
    assert_eq!(s.hosts.entries, 4);
    let (min, max, avg) = s.hosts.state_change.triple().expect("data");
    assert_eq!(min, 0.0);
    assert_eq!(max, 50.0);
    assert!(approx(avg, 20.0));
    let (_, _, active_avg) = s.hosts.active.state_change.triple().expect("data");
    assert!(approx(active_avg, 20.0));
}

#[test]
fn test_empty_stream_has_no_data() {
    let s = aggregate_str("", NOW);
    assert_eq!(s.hosts.entries, 0);
    assert_eq!(s.services.entries, 0);
    for stat in [
        &s.hosts.state_change,
        &s.hosts.active.latency,
        &s.hosts.active.execution_time,
        &s.hosts.passive.latency,
        &s.services.state_change,
        &s.services.active.state_change,
        &s.services.passive.state_change,
    ] {
        assert!(stat.is_empty());
        assert_eq!(stat.triple(), None);
    }
}

#[test]
fn test_window_boundaries() {
    let at = |age: i64| {
        aggregate_str(&service_block(&[&format!("last_check={}", NOW - age)]), NOW)
            .services
            .active
            .windows
    };

    let w = at(60);
    assert_eq!(
        (w.last_1min, w.last_5min, w.last_15min, w.last_60min),
        (1, 1, 1, 1)
    );
    let w = at(61);
    assert_eq!(
        (w.last_1min, w.last_5min, w.last_15min, w.last_60min),
        (0, 1, 1, 1)
    );
    let w = at(901);
    assert_eq!(
        (w.last_1min, w.last_5min, w.last_15min, w.last_60min),
        (0, 0, 0, 1)
    );
    let w = at(3601);
    assert_eq!(
        (w.last_1min, w.last_5min, w.last_15min, w.last_60min),
        (0, 0, 0, 0)
    );
    let w = at(-5);
    assert_eq!(w.last_60min, 0);
}

#[test]
fn test_critical_service_counts_once() {
    let s = aggregate_str(&service_block(&["current_state=2"]), NOW);
    let st = &s.services.states;
    assert_eq!((st.ok, st.warning, st.unknown, st.critical), (0, 0, 0, 1));
    assert_eq!(st.problems(), 1);
}

#[test]
fn test_single_service_block_roundtrip() {
    let input = format!(
        "service {{\ncheck_execution_time=0.5\ncheck_latency=0.1\npercent_state_change=12.5\n\
         check_type=0\ncurrent_state=0\nis_flapping=0\nscheduled_downtime_depth=0\n\
         last_check={}\nhas_been_checked=1\nshould_be_scheduled=1\n}}\n",
        NOW - 30
    );
    let s = aggregate_str(&input, NOW);
    let svc = &s.services;
    assert_eq!(svc.entries, 1);
    assert_eq!(svc.states.ok, 1);
    assert_eq!(svc.active_checks, 1);
    assert_eq!(svc.passive_checks, 0);
    assert_eq!(svc.active.latency.triple(), Some((0.1, 0.1, 0.1)));
    assert_eq!(svc.active.execution_time.triple(), Some((0.5, 0.5, 0.5)));
    assert_eq!(svc.active.state_change.triple(), Some((12.5, 12.5, 12.5)));
    assert_eq!(svc.state_change.triple(), Some((12.5, 12.5, 12.5)));
    let w = svc.active.windows;
    assert_eq!(
        (w.last_1min, w.last_5min, w.last_15min, w.last_60min),
        (1, 1, 1, 1)
    );
    assert_eq!(svc.flapping, 0);
    assert_eq!(svc.in_downtime, 0);
    assert_eq!(svc.checked, 1);
    assert_eq!(svc.scheduled, 1);
}

#[test]
fn test_fields_do_not_carry_over_between_blocks() {
    let mut input = service_block(&[
        "is_flapping=1",
        "has_been_checked=0",
        "should_be_scheduled=0",
        "scheduled_downtime_depth=1",
        "current_state=2",
        "check_type=1",
    ]);
    input += &service_block(&[]);
    let s = aggregate_str(&input, NOW);
    let svc = &s.services;
    assert_eq!(svc.flapping, 1);
    assert_eq!(svc.checked, 1);
    assert_eq!(svc.scheduled, 1);
    assert_eq!(svc.in_downtime, 1);
    assert_eq!((svc.states.ok, svc.states.critical), (1, 1));
    assert_eq!((svc.active_checks, svc.passive_checks), (1, 1));
}

#[test]
fn test_extreme_timestamps_do_not_abort() {
    let mut input = service_block(&["last_check=-9223372036854775808"]);
    input += &service_block(&["last_check=9223372036854775807", "check_type=1"]);
    input += &service_block(&["last_check=99999999999999999999999"]);
    input += &common::block(
        "info",
        &["created=-9223372036854775808"],
    );
    input += &common::block(
        "programstatus",
        &[
            "program_start=-99999999999999999999999",
            "active_scheduled_host_check_stats=9223372036854775807,0,0",
            "active_ondemand_host_check_stats=1,0,0",
        ],
    );
    let s = aggregate_str(&input, NOW);
    assert_eq!(s.services.entries, 3);
    assert_eq!(s.services.active.windows, Default::default());
    assert_eq!(s.services.passive.windows, Default::default());
    assert_eq!(s.status_file_age(NOW), i64::MAX as u64);
    assert_eq!(s.program_running_time(NOW), i64::MAX as u64);
    assert_eq!(s.program.host_checks.active_total().last_1min, i64::MAX);
}

#[test]
fn test_unterminated_block_counts_no_tallies() {
    let input = "service {\ncurrent_state=2\ncheck_latency=0.4\n";
    let s = aggregate_str(input, NOW);
    assert_eq!(s.services.states.critical, 0);
    assert_eq!(s.services.active_checks, 0);
    assert!(s.services.active.latency.is_empty());
}

#[test]
fn test_ingesting_a_block_twice_doubles_counters() {
    let block = Block::new(BlockKind::Service)
        .with_field("current_state", "1")
        .with_field("is_flapping", "1")
        .with_field("check_latency", "0.2")
        .with_field("last_check", NOW.to_string());
    let mut agg = Aggregator::new();
    agg.open(BlockKind::Service);
    agg.ingest(&block, NOW);
    let once = agg.snapshot().clone();
    agg.open(BlockKind::Service);
    agg.ingest(&block, NOW);
    let twice = agg.finish();

    assert_eq!(twice.services.entries, 2 * once.services.entries);
    assert_eq!(twice.services.states.warning, 2 * once.services.states.warning);
    assert_eq!(twice.services.flapping, 2 * once.services.flapping);
    assert_eq!(twice.services.active_checks, 2);
    assert_eq!(twice.services.active.windows.last_1min, 2);
    assert_eq!(twice.services.active.latency.count, 2);
}

#[test]
fn test_sample_dump_totals() {
    let s = aggregate_str(&common::sample_dump(NOW), NOW);

    assert_eq!(s.info.version.as_deref(), Some("4.4.6"));
    assert_eq!(s.status_file_age(NOW), 5);
    assert_eq!(s.program.pid, 4242);
    assert_eq!(s.program_running_time(NOW), 90_061);
    assert_eq!(s.program.command_buffer.high, 17);
    assert_eq!(s.program.host_checks.active_total().last_15min, 33);
    assert_eq!(s.program.service_checks.passive.last_5min, 9);

    let h = &s.hosts;
    assert_eq!(h.entries, 2);
    assert_eq!((h.states.up, h.states.down, h.states.unreachable), (1, 1, 0));
    assert_eq!(h.flapping, 1);
    assert_eq!(h.active.windows.last_1min, 1);
    assert_eq!(h.active.windows.last_15min, 2);
    let (min, max, avg) = h.active.latency.triple().expect("data");
    assert_eq!((min, max), (0.1, 0.3));
    assert!(approx(avg, 0.2));

    let v = &s.services;
    assert_eq!(v.entries, 3);
    assert_eq!(v.active_checks, 2);
    assert_eq!(v.passive_checks, 1);
    assert_eq!(v.in_downtime, 1);
    assert_eq!(v.checked, 3);
    assert_eq!(v.scheduled, 2);
    assert_eq!(v.passive.latency.triple(), Some((0.05, 0.05, 0.05)));
    assert_eq!(v.passive.windows.last_5min, 1);
    assert_eq!(v.active.windows.last_60min, 2);
    assert_eq!(v.active.windows.last_15min, 1);
    let (min, max, avg) = v.state_change.triple().expect("data");
    assert_eq!((min, max), (5.0, 25.0));
    assert!(approx(avg, 15.0));
}

#[test]
fn test_later_program_block_overrides_only_present_fields() {
    let mut input = common::block("programstatus", &["nagios_pid=1", "program_start=100"]);
    input += &common::block("programstatus", &["nagios_pid=2"]);
    let s = aggregate_str(&input, NOW);
    assert_eq!(s.program.pid, 2);
    assert_eq!(s.program.program_start, 100);
}

#[test]
fn test_read_status_file_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("status.dat");
    std::fs::write(&path, common::sample_dump(NOW)).expect("write");
    let s = read_status_file(&path, NOW).expect("read");
    assert_eq!(s.hosts.entries, 2);
    assert_eq!(s.services.entries, 3);
}

#[test]
fn test_read_status_file_missing_is_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = read_status_file(&dir.path().join("nope.dat"), NOW).unwrap_err();
    assert!(err.to_string().contains("nope.dat"));
}
