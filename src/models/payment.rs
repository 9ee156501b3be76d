use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::page::push_pagination;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Collection,
    Payout,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Collection => "collection",
            PaymentKind::Payout => "payout",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// A mobile-money movement, immutable once recorded. Amounts are UGX.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub transaction_id: String,
    pub phone: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    pub status: PaymentStatus,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub kind: Option<PaymentKind>,
    pub status: Option<PaymentStatus>,
    pub search: Option<String>,
}

impl PaymentFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        push_pagination(&mut pairs, self.page, self.page_size, self.search.as_deref());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::{PaymentFilter, PaymentKind, PaymentStatus};
    use crate::models::page::query_string;

    #[test]
    fn kind_and_status_serialize() {
        let filter = PaymentFilter {
            kind: Some(PaymentKind::Payout),
            status: Some(PaymentStatus::Failed),
            page: Some(1),
            ..PaymentFilter::default()
        };

        assert_eq!(
            query_string(&filter.query_pairs()),
            "type=payout&status=failed&page=1"
        );
    }

    #[test]
    fn payment_decodes_wire_shape() {
        let payment: super::Payment = serde_json::from_value(serde_json::json!({
            "id": "pay_1",
            "date": "2024-06-01T08:30:00Z",
            "transaction_id": "MTN-778812",
            "phone": "+256701234567",
            "amount": 45000,
            "type": "collection",
            "status": "success",
            "reason": null
        }))
        .unwrap();

        assert_eq!(payment.kind, PaymentKind::Collection);
        assert_eq!(payment.status, PaymentStatus::Success);
        assert_eq!(payment.amount, 45000);
        assert!(payment.reason.is_none());
    }
}
