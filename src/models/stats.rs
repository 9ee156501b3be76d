use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw `/admin/stats` snapshot as the backend sends it. Every field is
/// optional on the wire; normalization defaults absent numerics to zero.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawStats {
    pub total_requests: Option<u64>,
    pub completed_jobs: Option<u64>,
    pub pending_jobs: Option<u64>,
    pub total_mechanics: Option<u64>,
    pub verified_mechanics: Option<u64>,
    pub revenue_collected_ugx: Option<i64>,
    pub paid_to_mechanics_ugx: Option<i64>,
    pub profit_ugx: Option<i64>,
    pub as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_requests: u64,
    pub completed_jobs: u64,
    pub pending_jobs: u64,
    pub total_mechanics: u64,
    pub verified_mechanics: u64,
    pub revenue_collected: i64,
    pub paid_to_mechanics: i64,
    pub profit: i64,
}

impl From<RawStats> for DashboardStats {
    fn from(raw: RawStats) -> Self {
        let revenue_collected = raw.revenue_collected_ugx.unwrap_or(0);
        let paid_to_mechanics = raw.paid_to_mechanics_ugx.unwrap_or(0);

        Self {
            total_requests: raw.total_requests.unwrap_or(0),
            completed_jobs: raw.completed_jobs.unwrap_or(0),
            pending_jobs: raw.pending_jobs.unwrap_or(0),
            total_mechanics: raw.total_mechanics.unwrap_or(0),
            verified_mechanics: raw.verified_mechanics.unwrap_or(0),
            revenue_collected,
            paid_to_mechanics,
            profit: raw
                .profit_ugx
                .unwrap_or(revenue_collected - paid_to_mechanics),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RevenuePoint {
    pub date: DateTime<Utc>,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaymentTotals {
    pub total_collected: i64,
    pub total_paid: i64,
}

impl RawStats {
    /// The backend exposes only this snapshot, not a time series; the chart
    /// gets a one-point series stamped with the snapshot time.
    pub(crate) fn revenue_point(&self, now: DateTime<Utc>) -> RevenuePoint {
        RevenuePoint {
            date: self.as_of.unwrap_or(now),
            amount: self.revenue_collected_ugx.unwrap_or(0),
        }
    }

    pub(crate) fn payment_totals(&self) -> PaymentTotals {
        PaymentTotals {
            total_collected: self.revenue_collected_ugx.unwrap_or(0),
            total_paid: self.paid_to_mechanics_ugx.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardStats, RawStats};
    use chrono::{TimeZone, Utc};

    fn raw(json: serde_json::Value) -> RawStats {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn absent_fields_default_to_zero() {
        let stats = DashboardStats::from(raw(serde_json::json!({})));

        assert_eq!(stats.total_requests, 0);
        assert_eq!(stats.revenue_collected, 0);
        assert_eq!(stats.profit, 0);
    }

    #[test]
    fn profit_is_derived_when_backend_omits_it() {
        let stats = DashboardStats::from(raw(serde_json::json!({
            "revenue_collected_ugx": 500_000,
            "paid_to_mechanics_ugx": 320_000
        })));

        assert_eq!(stats.profit, 180_000);
    }

    #[test]
    fn explicit_profit_wins_over_derivation() {
        let stats = DashboardStats::from(raw(serde_json::json!({
            "revenue_collected_ugx": 500_000,
            "paid_to_mechanics_ugx": 320_000,
            "profit_ugx": 100_000
        })));

        assert_eq!(stats.profit, 100_000);
    }

    #[test]
    fn revenue_point_prefers_snapshot_time() {
        let raw = raw(serde_json::json!({
            "revenue_collected_ugx": 75_000,
            "as_of": "2024-06-01T00:00:00Z"
        }));
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();

        let point = raw.revenue_point(now);
        assert_eq!(point.date, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(point.amount, 75_000);
    }

    #[test]
    fn revenue_point_falls_back_to_now() {
        let raw = raw(serde_json::json!({}));
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();

        assert_eq!(raw.revenue_point(now).date, now);
    }
}
