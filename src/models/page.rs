use serde::{Deserialize, Serialize};

/// One page of a backend listing. The backend speaks camelCase for the
/// pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

pub(crate) fn push_pagination(
    pairs: &mut Vec<(&'static str, String)>,
    page: Option<u32>,
    page_size: Option<u32>,
    search: Option<&str>,
) {
    if let Some(page) = page {
        pairs.push(("page", page.to_string()));
    }
    if let Some(page_size) = page_size {
        pairs.push(("pageSize", page_size.to_string()));
    }
    if let Some(search) = search {
        let search = search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
    }
}

#[cfg(test)]
pub(crate) fn query_string(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
