// MRTG-style query surface: symbolic variable name in, one number out.
//
// Timing series (LAT, EXT) are reported in whole milliseconds, percentages
// are truncated to integers, empty series read as 0 and unknown names are
// echoed back unchanged.

use crate::models::{RecentActivity, RunningStat, StateTally, StatusSnapshot, TargetStats};

use super::format_breakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Active,
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    Min,
    Max,
    Avg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Host,
    Service,
}

fn split_target(rest: &str) -> Option<(Target, &str)> {
    if let Some(tail) = rest.strip_prefix("HST") {
        Some((Target::Host, tail))
    } else {
        rest.strip_prefix("SVC").map(|tail| (Target::Service, tail))
    }
}

fn split_activity(rest: &str) -> Option<(Activity, &str)> {
    if let Some(tail) = rest.strip_prefix("ACT") {
        Some((Activity::Active, tail))
    } else {
        rest.strip_prefix("PSV").map(|tail| (Activity::Passive, tail))
    }
}

/// `<n>M` window suffix. Only the exact spellings are accepted.
fn window_minutes(tail: &str) -> Option<u32> {
    match tail {
        "1M" => Some(1),
        "5M" => Some(5),
        "15M" => Some(15),
        "60M" => Some(60),
        _ => None,
    }
}

/// Value for one variable. `now` is used by the age / runtime variables.
pub fn mrtg_value(snapshot: &StatusSnapshot, key: &str, now: i64) -> String {
    fixed_value(snapshot, key, now)
        .or_else(|| statistic_value(snapshot, key))
        .or_else(|| window_value(snapshot, key))
        .or_else(|| activity_value(snapshot, key))
        .unwrap_or_else(|| key.to_string())
}

/// Values for a comma-separated variable list, each followed by `delimiter`.
/// A final newline is added when the delimiter is not already one.
pub fn render_mrtg(snapshot: &StatusSnapshot, variables: &str, delimiter: &str, now: i64) -> String {
    let mut out = String::new();
    for key in variables.split(',').filter(|k| !k.is_empty()) {
        out.push_str(&mrtg_value(snapshot, key, now));
        out.push_str(delimiter);
    }
    if delimiter != "\n" {
        out.push('\n');
    }
    out
}

fn fixed_value(s: &StatusSnapshot, key: &str, now: i64) -> Option<String> {
    let version = s.info.version.as_deref().unwrap_or_default();
    let value = match key {
        "PROGRUNTIME" => format_breakdown(s.program_running_time(now)),
        "PROGRUNTIMETT" => s.program_running_time(now).to_string(),
        "STATUSFILEAGE" => format_breakdown(s.status_file_age(now)),
        "STATUSFILEAGETT" => s.status_file_age(now).to_string(),
        "NAGIOSVERSION" => version.to_string(),
        "NAGIOSPID" => s.program.pid.to_string(),
        "NAGIOSVERPID" => format!("Nagios {} (pid={})", version, s.program.pid),

        "TOTCMDBUF" => s.program.command_buffer.total.to_string(),
        "USEDCMDBUF" => s.program.command_buffer.used.to_string(),
        "HIGHCMDBUF" => s.program.command_buffer.high.to_string(),

        "NUMSERVICES" => s.services.entries.to_string(),
        "NUMHOSTS" => s.hosts.entries.to_string(),

        "NUMSVCOK" => s.services.states.ok.to_string(),
        "NUMSVCWARN" => s.services.states.warning.to_string(),
        "NUMSVCUNKN" => s.services.states.unknown.to_string(),
        "NUMSVCCRIT" => s.services.states.critical.to_string(),
        "NUMSVCPROB" => s.services.states.problems().to_string(),
        "NUMSVCCHECKED" => s.services.checked.to_string(),
        "NUMSVCSCHEDULED" => s.services.scheduled.to_string(),
        "NUMSVCFLAPPING" => s.services.flapping.to_string(),
        "NUMSVCDOWNTIME" => s.services.in_downtime.to_string(),

        "NUMHSTUP" => s.hosts.states.up.to_string(),
        "NUMHSTDOWN" => s.hosts.states.down.to_string(),
        "NUMHSTUNR" => s.hosts.states.unreachable.to_string(),
        "NUMHSTPROB" => s.hosts.states.problems().to_string(),
        "NUMHSTCHECKED" => s.hosts.checked.to_string(),
        "NUMHSTSCHEDULED" => s.hosts.scheduled.to_string(),
        "NUMHSTFLAPPING" => s.hosts.flapping.to_string(),
        "NUMHSTDOWNTIME" => s.hosts.in_downtime.to_string(),

        _ => return None,
    };
    Some(value)
}

/// `{MIN,MAX,AVG}[ACT|PSV]{SVC,HST}{LAT,EXT,PSC}`.
fn statistic_value(s: &StatusSnapshot, key: &str) -> Option<String> {
    let (pick, rest) = if let Some(rest) = key.strip_prefix("MIN") {
        (Pick::Min, rest)
    } else if let Some(rest) = key.strip_prefix("MAX") {
        (Pick::Max, rest)
    } else {
        (Pick::Avg, key.strip_prefix("AVG")?)
    };
    let (activity, rest) = match split_activity(rest) {
        Some((activity, tail)) => (Some(activity), tail),
        None => (None, rest),
    };
    let (target, series) = split_target(rest)?;
    let stat = match target {
        Target::Host => select_series(&s.hosts, activity, series)?,
        Target::Service => select_series(&s.services, activity, series)?,
    };
    let value = match pick {
        Pick::Min => stat.minimum,
        Pick::Max => stat.maximum,
        Pick::Avg => stat.mean(),
    }
    .unwrap_or(0.0);
    let rendered = if series == "PSC" {
        value as i64
    } else {
        (value * 1000.0) as i64
    };
    Some(rendered.to_string())
}

fn select_series<'a, S: StateTally>(
    t: &'a TargetStats<S>,
    activity: Option<Activity>,
    series: &str,
) -> Option<&'a RunningStat> {
    match (activity, series) {
        (None, "PSC") => Some(&t.state_change),
        (Some(Activity::Active), "LAT") => Some(&t.active.latency),
        (Some(Activity::Active), "EXT") => Some(&t.active.execution_time),
        (Some(Activity::Active), "PSC") => Some(&t.active.state_change),
        (Some(Activity::Passive), "LAT") => Some(&t.passive.latency),
        (Some(Activity::Passive), "PSC") => Some(&t.passive.state_change),
        _ => None,
    }
}

/// `NUM{HST,SVC}{ACT,PSV}CHK{1,5,15,60}M`: entries checked within a window.
fn window_value(s: &StatusSnapshot, key: &str) -> Option<String> {
    let (target, rest) = split_target(key.strip_prefix("NUM")?)?;
    let (activity, rest) = split_activity(rest)?;
    let minutes = window_minutes(rest.strip_prefix("CHK")?)?;
    let windows = match (target, activity) {
        (Target::Host, Activity::Active) => &s.hosts.active.windows,
        (Target::Host, Activity::Passive) => &s.hosts.passive.windows,
        (Target::Service, Activity::Active) => &s.services.active.windows,
        (Target::Service, Activity::Passive) => &s.services.passive.windows,
    };
    windows.by_minutes(minutes).map(|n| n.to_string())
}

/// Daemon-reported check and command rates:
/// `NUM<class>HSTCHECKS<n>M`, `NUM<class>SVCCHECKS<n>M`, `NUMEXTCMDS<n>M`.
fn activity_value(s: &StatusSnapshot, key: &str) -> Option<String> {
    let rest = key.strip_prefix("NUM")?;
    let (activity, tail): (RecentActivity, &str) =
        if let Some(tail) = rest.strip_prefix("EXTCMDS") {
            (s.program.external_commands, tail)
        } else if let Some((class, tail)) = rest.split_once("HSTCHECKS") {
            let h = &s.program.host_checks;
            let activity = match class {
                "ACT" => h.active_total(),
                "OACT" => h.active_ondemand,
                "SACT" => h.active_scheduled,
                "PAR" => h.parallel,
                "SER" => h.serial,
                "PSV" => h.passive,
                "CACHED" => h.cached,
                _ => return None,
            };
            (activity, tail)
        } else if let Some((class, tail)) = rest.split_once("SVCCHECKS") {
            let c = &s.program.service_checks;
            let activity = match class {
                "ACT" => c.active_total(),
                "OACT" => c.active_ondemand,
                "SACT" => c.active_scheduled,
                "PSV" => c.passive,
                "CACHED" => c.cached,
                _ => return None,
            };
            (activity, tail)
        } else {
            return None;
        };
    activity
        .by_minutes(window_minutes(tail)?)
        .map(|n| n.to_string())
}
