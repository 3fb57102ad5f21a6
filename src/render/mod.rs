// Presentation of a finished StatusSnapshot: human report, MRTG values, JSON.

pub mod mrtg;
pub mod report;

pub use mrtg::{mrtg_value, render_mrtg};
pub use report::render_report;

use crate::models::StatusSnapshot;

/// `Xd Xh Xm Xs` breakdown of a duration in seconds.
pub fn format_breakdown(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    format!("{days}d {hours}h {minutes}m {seconds}s")
}

/// Pretty JSON of the whole snapshot.
pub fn render_json(snapshot: &StatusSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}
