// Human-readable full report.

use std::fmt::Write;
use std::path::Path;

use crate::models::{CheckWindows, RecentActivity, RunningStat, StatusSnapshot};

use super::format_breakdown;

const LABEL_WIDTH: usize = 40;
const RULE: &str = "------------------------------------------------------";

/// `min / max / avg unit` at three decimals, or `-` for an empty series.
fn triple(stat: &RunningStat, unit: &str) -> String {
    match stat.triple() {
        Some((min, max, avg)) => format!("{min:.3} / {max:.3} / {avg:.3} {unit}"),
        None => "-".to_string(),
    }
}

fn windows4(w: &CheckWindows) -> String {
    format!(
        "{} / {} / {} / {}",
        w.last_1min, w.last_5min, w.last_15min, w.last_60min
    )
}

fn windows3(a: RecentActivity) -> String {
    format!("{} / {} / {}", a.last_1min, a.last_5min, a.last_15min)
}

/// Line builder with labels padded to a fixed column.
#[derive(Default)]
struct Report {
    out: String,
}

impl Report {
    fn heading(&mut self, title: &str) {
        let _ = writeln!(self.out, "{title}\n{RULE}");
    }

    fn field(&mut self, label: &str, value: impl std::fmt::Display) {
        let label = format!("{label}:");
        let _ = writeln!(self.out, "{label:<LABEL_WIDTH$}{value}");
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }
}

/// Renders every category of the snapshot. `status_file` is only echoed.
pub fn render_report(snapshot: &StatusSnapshot, status_file: &Path, now: i64) -> String {
    let mut r = Report::default();

    let s = snapshot;
    r.heading("CURRENT STATUS DATA");
    let svc = &s.services;
    let hst = &s.hosts;
    let prog = &s.program;

    r.field("Status File", status_file.display().to_string());
    r.field("Status File Age", format_breakdown(s.status_file_age(now)));
    r.field(
        "Status File Version",
        s.info.version.clone().unwrap_or_default(),
    );
    r.blank();
    r.field("Program Running Time", format_breakdown(s.program_running_time(now)));
    r.field("Nagios PID", prog.pid.to_string());
    r.field(
        "Used/High/Total Command Buffers",
        format!(
            "{} / {} / {}",
            prog.command_buffer.used, prog.command_buffer.high, prog.command_buffer.total
        ),
    );
    r.field(
        "Used/High/Total Check Result Buffers",
        format!(
            "{} / {} / {}",
            prog.check_result_buffer.used,
            prog.check_result_buffer.high,
            prog.check_result_buffer.total
        ),
    );
    r.blank();

    r.field("Total Services", svc.entries.to_string());
    r.field("Services Checked", svc.checked.to_string());
    r.field("Services Scheduled", svc.scheduled.to_string());
    r.field("Services Actively Checked", svc.active_checks.to_string());
    r.field("Services Passively Checked", svc.passive_checks.to_string());
    r.field("Total Service State Change", triple(&svc.state_change, "%"));
    r.field("Active Service Latency", triple(&svc.active.latency, "sec"));
    r.field(
        "Active Service Execution Time",
        triple(&svc.active.execution_time, "sec"),
    );
    r.field("Active Service State Change", triple(&svc.active.state_change, "%"));
    r.field("Active Services Last 1/5/15/60 min", windows4(&svc.active.windows));
    r.field("Passive Service Latency", triple(&svc.passive.latency, "sec"));
    r.field("Passive Service State Change", triple(&svc.passive.state_change, "%"));
    r.field("Passive Services Last 1/5/15/60 min", windows4(&svc.passive.windows));
    r.field(
        "Services Ok/Warn/Unk/Crit",
        format!(
            "{} / {} / {} / {}",
            svc.states.ok, svc.states.warning, svc.states.unknown, svc.states.critical
        ),
    );
    r.field("Services Flapping", svc.flapping.to_string());
    r.field("Services In Downtime", svc.in_downtime.to_string());
    r.blank();

    r.field("Total Hosts", hst.entries.to_string());
    r.field("Hosts Checked", hst.checked.to_string());
    r.field("Hosts Scheduled", hst.scheduled.to_string());
    r.field("Hosts Actively Checked", hst.active_checks.to_string());
    r.field("Hosts Passively Checked", hst.passive_checks.to_string());
    r.field("Total Host State Change", triple(&hst.state_change, "%"));
    r.field("Active Host Latency", triple(&hst.active.latency, "sec"));
    r.field(
        "Active Host Execution Time",
        triple(&hst.active.execution_time, "sec"),
    );
    r.field("Active Host State Change", triple(&hst.active.state_change, "%"));
    r.field("Active Hosts Last 1/5/15/60 min", windows4(&hst.active.windows));
    r.field("Passive Host Latency", triple(&hst.passive.latency, "sec"));
    r.field("Passive Host State Change", triple(&hst.passive.state_change, "%"));
    r.field("Passive Hosts Last 1/5/15/60 min", windows4(&hst.passive.windows));
    r.field(
        "Hosts Up/Down/Unreach",
        format!(
            "{} / {} / {}",
            hst.states.up, hst.states.down, hst.states.unreachable
        ),
    );
    r.field("Hosts Flapping", hst.flapping.to_string());
    r.field("Hosts In Downtime", hst.in_downtime.to_string());
    r.blank();

    let hc = &prog.host_checks;
    r.field("Active Host Checks Last 1/5/15 min", windows3(hc.active_total()));
    r.field("   Scheduled", windows3(hc.active_scheduled));
    r.field("   On-demand", windows3(hc.active_ondemand));
    r.field("   Parallel", windows3(hc.parallel));
    r.field("   Serial", windows3(hc.serial));
    r.field("   Cached", windows3(hc.cached));
    r.field("Passive Host Checks Last 1/5/15 min", windows3(hc.passive));

    let sc = &prog.service_checks;
    r.field("Active Service Checks Last 1/5/15 min", windows3(sc.active_total()));
    r.field("   Scheduled", windows3(sc.active_scheduled));
    r.field("   On-demand", windows3(sc.active_ondemand));
    r.field("   Cached", windows3(sc.cached));
    r.field("Passive Service Checks Last 1/5/15 min", windows3(sc.passive));
    r.blank();

    r.field(
        "External Commands Last 1/5/15 min",
        windows3(prog.external_commands),
    );

    r.blank();
    r.out
}
