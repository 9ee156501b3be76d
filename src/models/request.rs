use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::page::push_pagination;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: String,
    pub customer_phone: String,
    pub service_type: String,
    pub location: String,
    pub status: RequestStatus,
    pub mechanic_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing filter; `status: None` means all statuses and is not sent.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<RequestStatus>,
    pub search: Option<String>,
}

impl RequestFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        push_pagination(&mut pairs, self.page, self.page_size, self.search.as_deref());
        pairs
    }
}
