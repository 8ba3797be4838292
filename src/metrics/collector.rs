use crate::utils::time::current_timestamp;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub state_lookups: AtomicU64,
    pub failed_state_lookups: AtomicU64,
    pub login_payloads: AtomicU64,
    pub unauthorized_requests: AtomicU64,
    pub start_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub state_lookups: u64,
    pub failed_state_lookups: u64,
    pub lookup_success_rate: f64,
    pub login_payloads: u64,
    pub unauthorized_requests: u64,
    pub uptime_seconds: i64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            state_lookups: AtomicU64::new(0),
            failed_state_lookups: AtomicU64::new(0),
            login_payloads: AtomicU64::new(0),
            unauthorized_requests: AtomicU64::new(0),
            start_time: current_timestamp(),
        }
    }

    pub fn increment_state_lookups(&self) {
        self.state_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed_lookups(&self) {
        self.failed_state_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_login_payloads(&self) {
        self.login_payloads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_unauthorized(&self) {
        self.unauthorized_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters plus derived values
    pub fn get_snapshot(&self) -> MetricsSnapshot {
        let state_lookups = self.state_lookups.load(Ordering::Relaxed);
        let failed_state_lookups = self.failed_state_lookups.load(Ordering::Relaxed);

        let lookup_success_rate = if state_lookups > 0 {
            (state_lookups.saturating_sub(failed_state_lookups) as f64 / state_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsSnapshot {
            state_lookups,
            failed_state_lookups,
            lookup_success_rate,
            login_payloads: self.login_payloads.load(Ordering::Relaxed),
            unauthorized_requests: self.unauthorized_requests.load(Ordering::Relaxed),
            uptime_seconds: current_timestamp() - self.start_time,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
