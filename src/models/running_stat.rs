// Online min / max / mean accumulator for one numeric series.

use serde::{Deserialize, Serialize};

/// Single-pass statistic: no samples are retained.
///
/// `minimum` and `maximum` stay `None` until the first sample, so an empty
/// series reports "no data" instead of a misleading zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningStat {
    pub count: u64,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub average: f64,
}

impl RunningStat {
    /// Adds a sample, averaging over the samples seen by this series.
    pub fn push(&mut self, sample: f64) {
        let n = self.count + 1;
        self.push_over(sample, n);
    }

    /// Adds a sample, averaging over an externally tracked population of `n`
    /// entries. `n` never drops below this series' own sample count.
    pub fn push_over(&mut self, sample: f64, n: u64) {
        self.count += 1;
        let n = n.max(self.count) as f64;
        self.average += (sample - self.average) / n;
        if self.minimum.is_none_or(|m| sample < m) {
            self.minimum = Some(sample);
        }
        if self.maximum.is_none_or(|m| sample > m) {
            self.maximum = Some(sample);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of the samples, or `None` when the series is empty.
    pub fn mean(&self) -> Option<f64> {
        (!self.is_empty()).then_some(self.average)
    }

    /// `(min, max, avg)`, or `None` when the series is empty.
    pub fn triple(&self) -> Option<(f64, f64, f64)> {
        Some((self.minimum?, self.maximum?, self.mean()?))
    }
}
