use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::mechanic::{Mechanic, MechanicFilter, MechanicUpdate, NewMechanic};
use crate::models::page::Page;
use crate::models::payment::{Payment, PaymentFilter};
use crate::models::request::{RequestFilter, ServiceRequest};
use crate::models::stats::{DashboardStats, PaymentTotals, RawStats, RevenuePoint};
use crate::session::TokenStore;

/// Single choke point for every backend call. Attaches the bearer token,
/// fails closed when no session exists, and clears the session on a 401.
pub struct AdminClient {
    base_url: String,
    http: reqwest::Client,
    tokens: Box<dyn TokenStore>,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>, tokens: Box<dyn TokenStore>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new(), tokens)
    }

    pub fn with_http_client(
        base_url: impl Into<String>,
        http: reqwest::Client,
        tokens: Box<dyn TokenStore>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            tokens,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated()
    }

    pub fn logout(&self) {
        self.tokens.clear();
    }

    /// Exchanges the master password for a bearer token and persists it.
    /// 401 and 422 both mean a wrong password.
    pub async fn login(&self, password: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/login", self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::UNPROCESSABLE_ENTITY {
            return Err(ClientError::InvalidCredentials);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        self.tokens.set(&login.access_token);
        Ok(login.access_token)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        let raw: RawStats = self.get_json("/admin/stats", &[]).await?;
        Ok(raw.into())
    }

    /// The backend has no time-series endpoint; the chart gets a one-point
    /// series synthesized from the stats snapshot.
    pub async fn revenue_chart(&self) -> Result<Vec<RevenuePoint>, ClientError> {
        let raw: RawStats = self.get_json("/admin/stats", &[]).await?;
        Ok(vec![raw.revenue_point(Utc::now())])
    }

    pub async fn payment_totals(&self) -> Result<PaymentTotals, ClientError> {
        let raw: RawStats = self.get_json("/admin/stats", &[]).await?;
        Ok(raw.payment_totals())
    }

    pub async fn service_requests(
        &self,
        filter: &RequestFilter,
    ) -> Result<Page<ServiceRequest>, ClientError> {
        self.get_json("/admin/requests", &filter.query_pairs()).await
    }

    pub async fn mechanics(&self, filter: &MechanicFilter) -> Result<Page<Mechanic>, ClientError> {
        self.get_json("/admin/mechanics", &filter.query_pairs()).await
    }

    pub async fn create_mechanic(&self, mechanic: &NewMechanic) -> Result<Mechanic, ClientError> {
        let body = serde_json::to_value(mechanic)
            .map_err(|err| ClientError::Decode(err.to_string()))?;
        let response = self
            .send(Method::POST, "/admin/mechanics", &[], Some(body))
            .await?;
        decode(response).await
    }

    pub async fn update_mechanic(
        &self,
        id: &str,
        update: &MechanicUpdate,
    ) -> Result<Mechanic, ClientError> {
        let body =
            serde_json::to_value(update).map_err(|err| ClientError::Decode(err.to_string()))?;
        let response = self
            .send(Method::PATCH, &format!("/admin/mechanics/{id}"), &[], Some(body))
            .await?;
        decode(response).await
    }

    pub async fn delete_mechanic(&self, id: &str) -> Result<(), ClientError> {
        self.send(Method::DELETE, &format!("/admin/mechanics/{id}"), &[], None)
            .await?;
        Ok(())
    }

    pub async fn payments(&self, filter: &PaymentFilter) -> Result<Page<Payment>, ClientError> {
        self.get_json("/admin/payments", &filter.query_pairs()).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ClientError> {
        let response = self.send(Method::GET, path, query, None).await?;
        decode(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, ClientError> {
        let token = match self.tokens.get() {
            Some(token) if !token.is_empty() => token,
            _ => {
                // Fail closed before touching the network.
                self.tokens.clear();
                return Err(ClientError::MissingSession);
            }
        };

        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.tokens.clear();
            return Err(ClientError::SessionExpired);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    response
        .json()
        .await
        .map_err(|err| ClientError::Decode(err.to_string()))
}
