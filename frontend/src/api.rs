//! HTTP adapter.
//!
//! Attaches the bearer token (when a session exists) to every outgoing
//! request, targets a configurable base path and surfaces non-2xx responses
//! as [`ApiError`] carrying the server's structured error body when present.
//! No retries, no deduplication, no caching.
//!
//! The per-resource service modules hang their methods off [`ApiClient`].

mod admin;
mod auth;
mod compras;
mod consultas;
mod planes;

use abogadolinea_shared::protocol::CuerpoError;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    /// Could not reach the server; no structured body available.
    Red(String),
    /// Non-2xx answer. `mensaje` is the server's error text, verbatim, or a
    /// plain status line when the body carried none.
    Servidor { status: u16, mensaje: String },
    /// 2xx answer whose body did not decode into the expected shape.
    Decodificacion(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Red(_) => write!(f, "Error al conectar con el servidor"),
            ApiError::Servidor { mensaje, .. } => f.write_str(mensaje),
            ApiError::Decodificacion(detalle) => {
                write!(f, "Respuesta inesperada del servidor: {detalle}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn con_auth(builder: RequestBuilder) -> RequestBuilder {
        match crate::auth::token_almacenado() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = Self::con_auth(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        decodificar(res).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        cuerpo: &B,
    ) -> Result<T, ApiError> {
        let res = Self::con_auth(Request::post(&self.url(path)))
            .json(cuerpo)
            .map_err(|e| ApiError::Red(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        decodificar(res).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        cuerpo: &B,
    ) -> Result<T, ApiError> {
        let res = Self::con_auth(Request::put(&self.url(path)))
            .json(cuerpo)
            .map_err(|e| ApiError::Red(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        decodificar(res).await
    }
}

async fn decodificar<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let status = res.status();
    if !res.ok() {
        let mensaje = match res.json::<CuerpoError>().await {
            Ok(cuerpo) => cuerpo.error,
            Err(_) => format!("Error del servidor (HTTP {status})"),
        };
        return Err(ApiError::Servidor { status, mensaje });
    }
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Decodificacion(e.to_string()))
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}
