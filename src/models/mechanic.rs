use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::page::push_pagination;

/// A registered mechanic. The wire field for the verification flag is
/// `is_verified`; older client drafts that used `verified` are obsolete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mechanic {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub jobs_completed: u32,
    #[serde(rename = "is_verified", default)]
    pub verified: bool,
    pub joined_at: DateTime<Utc>,
}

/// Payload for `POST /admin/mechanics`. The backend has no vehicle-type or
/// per-mechanic password fields.
#[derive(Debug, Clone, Serialize)]
pub struct NewMechanic {
    pub name: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "is_verified")]
    pub verified: bool,
}

/// Partial payload for `PATCH /admin/mechanics/{id}`; unset fields are left
/// untouched by the backend. Verification toggles through this call, there
/// is no dedicated verify route.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MechanicUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "is_verified", skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl MechanicUpdate {
    pub fn verification(verified: bool) -> Self {
        Self {
            verified: Some(verified),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MechanicFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub verified_only: bool,
    pub search: Option<String>,
}

impl MechanicFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.verified_only {
            pairs.push(("verified", "true".to_string()));
        }
        push_pagination(&mut pairs, self.page, self.page_size, self.search.as_deref());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::{MechanicFilter, MechanicUpdate};
    use crate::models::page::query_string;

    #[test]
    fn verified_only_with_page_serializes() {
        let filter = MechanicFilter {
            verified_only: true,
            page: Some(2),
            ..MechanicFilter::default()
        };

        let query = query_string(&filter.query_pairs());
        assert!(query.contains("verified=true&page=2"));
    }

    #[test]
    fn unverified_filter_omits_flag() {
        let filter = MechanicFilter {
            page: Some(1),
            ..MechanicFilter::default()
        };
        assert_eq!(query_string(&filter.query_pairs()), "page=1");
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let body = serde_json::to_value(MechanicUpdate::verification(true)).unwrap();
        assert_eq!(body, serde_json::json!({ "is_verified": true }));
    }
}
