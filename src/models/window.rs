// Trailing-window counters: how many checks ran within the last N minutes.

use serde::{Deserialize, Serialize};

pub const ONE_MINUTE_SECS: i64 = 60;
pub const FIVE_MINUTES_SECS: i64 = 300;
pub const FIFTEEN_MINUTES_SECS: i64 = 900;
pub const ONE_HOUR_SECS: i64 = 3600;

/// Nested 1/5/15/60-minute recency counters. One age can land in several
/// windows at once; the windows are cumulative, not exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckWindows {
    pub last_1min: u64,
    pub last_5min: u64,
    pub last_15min: u64,
    pub last_60min: u64,
}

impl CheckWindows {
    /// Counts a check that happened `age_secs` before the reference time.
    /// Negative ages (check stamped in the future) count nowhere.
    pub fn record_age(&mut self, age_secs: i64) {
        if age_secs < 0 {
            return;
        }
        if age_secs <= ONE_HOUR_SECS {
            self.last_60min += 1;
        }
        if age_secs <= FIFTEEN_MINUTES_SECS {
            self.last_15min += 1;
        }
        if age_secs <= FIVE_MINUTES_SECS {
            self.last_5min += 1;
        }
        if age_secs <= ONE_MINUTE_SECS {
            self.last_1min += 1;
        }
    }

    /// Counter for a window given in minutes (1, 5, 15 or 60).
    pub fn by_minutes(&self, minutes: u32) -> Option<u64> {
        match minutes {
            1 => Some(self.last_1min),
            5 => Some(self.last_5min),
            15 => Some(self.last_15min),
            60 => Some(self.last_60min),
            _ => None,
        }
    }
}

/// 1/5/15-minute counts reported by the daemon itself in its program block,
/// written as `a,b,c`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub last_1min: i64,
    pub last_5min: i64,
    pub last_15min: i64,
}

impl RecentActivity {
    pub fn new(last_1min: i64, last_5min: i64, last_15min: i64) -> Self {
        Self {
            last_1min,
            last_5min,
            last_15min,
        }
    }

    pub fn by_minutes(&self, minutes: u32) -> Option<i64> {
        match minutes {
            1 => Some(self.last_1min),
            5 => Some(self.last_5min),
            15 => Some(self.last_15min),
            _ => None,
        }
    }
}

impl std::ops::Add for RecentActivity {
    type Output = RecentActivity;

    fn add(self, rhs: Self) -> Self::Output {
        RecentActivity {
            last_1min: self.last_1min.saturating_add(rhs.last_1min),
            last_5min: self.last_5min.saturating_add(rhs.last_5min),
            last_15min: self.last_15min.saturating_add(rhs.last_15min),
        }
    }
}
