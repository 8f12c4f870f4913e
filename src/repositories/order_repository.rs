//! Repositorio de órdenes
//!
//! Contrato con el backend externo (Supabase / PostgREST) y su cliente HTTP.
//! El store recibe el repositorio por inyección; no existe un cliente global.

use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use crate::models::{NewOrder, Order, OrderStatus};
use crate::utils::errors::TransportError;

/// Operaciones que el backend expone sobre la tabla de órdenes
#[async_trait]
pub trait OrderRepository: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    /// `select * from orders order by id`
    async fn fetch_all(&self) -> Result<Vec<Order>, TransportError>;

    /// Historial de tickets de un cliente, ordenado por id
    async fn fetch_by_client(&self, client: &str) -> Result<Vec<Order>, TransportError>;

    /// `update orders set technician=?, status=? where id=?`
    async fn update_assignment(
        &self,
        id: i64,
        technician: &str,
        status: OrderStatus,
    ) -> Result<(), TransportError>;

    /// Inserta una orden y devuelve la fila creada con su id
    async fn insert(&self, order: NewOrder) -> Result<Order, TransportError>;
}

/// Cliente PostgREST para el proyecto Supabase
pub struct SupabaseOrderRepository {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseOrderRepository {
    pub fn new(
        base_url: String,
        api_key: String,
        table: String,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;

        info!("🔗 Backend Supabase configurado: {} (tabla '{}')", base_url, table);

        Ok(Self {
            client,
            base_url,
            api_key,
            table,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), self.table)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json")
    }

    async fn read_rows(response: Response) -> Result<Vec<Order>, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        let rows = response.json::<Vec<Order>>().await?;
        debug!("📥 {} filas recibidas del backend", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl OrderRepository for SupabaseOrderRepository {
    fn backend_tag(&self) -> &'static str {
        "supabase"
    }

    async fn fetch_all(&self) -> Result<Vec<Order>, TransportError> {
        let url = format!("{}?select=*&order=id.asc", self.table_url());
        let response = self.request(Method::GET, url).send().await?;
        Self::read_rows(response).await
    }

    async fn fetch_by_client(&self, client: &str) -> Result<Vec<Order>, TransportError> {
        let url = format!(
            "{}?select=*&client=eq.{}&order=id.asc",
            self.table_url(),
            urlencoding::encode(client)
        );
        let response = self.request(Method::GET, url).send().await?;
        Self::read_rows(response).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        technician: &str,
        status: OrderStatus,
    ) -> Result<(), TransportError> {
        let url = format!("{}?id=eq.{}", self.table_url(), id);
        let response = self
            .request(Method::PATCH, url)
            .header("Prefer", "return=representation")
            .json(&json!({ "technician": technician, "status": status }))
            .send()
            .await?;

        // PostgREST responde 200 con [] si ninguna fila coincide
        let rows = Self::read_rows(response).await?;
        if rows.is_empty() {
            return Err(TransportError::NotFound(id));
        }
        Ok(())
    }

    async fn insert(&self, order: NewOrder) -> Result<Order, TransportError> {
        let response = self
            .request(Method::POST, self.table_url())
            .header("Prefer", "return=representation")
            .json(&order)
            .send()
            .await?;

        Self::read_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::Decode("insert returned no rows".to_string()))
    }
}

/// Extrae el mensaje legible de un error PostgREST (`{"message": ...}`)
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let repo = SupabaseOrderRepository::new(
            "https://abc.supabase.co/".to_string(),
            "anon".to_string(),
            "orders".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(repo.table_url(), "https://abc.supabase.co/rest/v1/orders");
        assert_eq!(repo.backend_tag(), "supabase");
    }

    #[test]
    fn test_rejection_message() {
        let body = r#"{"code":"42501","message":"permission denied for table orders"}"#;
        assert_eq!(rejection_message(body), "permission denied for table orders");
        assert_eq!(rejection_message(" gateway timeout \n"), "gateway timeout");
    }
}
