// Snapshot models built by the aggregator

mod program;
mod running_stat;
mod snapshot;
mod target;
mod window;

pub use program::{BufferUsage, HostCheckActivity, ProgramStatus, ServiceCheckActivity, StatusInfo};
pub use running_stat::RunningStat;
pub use snapshot::StatusSnapshot;
pub use target::{
    ActiveCheckStats, HostState, HostStates, HostStats, PassiveCheckStats, ServiceState,
    ServiceStates, ServiceStats, StateTally, TargetStats,
};
pub use window::{
    CheckWindows, FIFTEEN_MINUTES_SECS, FIVE_MINUTES_SECS, ONE_HOUR_SECS, ONE_MINUTE_SECS,
    RecentActivity,
};
