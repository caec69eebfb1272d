//! Wire contract with the remote API.
//!
//! Request bodies, response envelopes and the list-shape normalization.
//! Several list endpoints answer either with a bare array or with an object
//! wrapping the array under a resource-named key; that is a known server
//! inconsistency and [`extraer_lista`] is the single place that absorbs it.

use crate::{flex, Consulta, Rol, Usuario};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

// =========================================================
// Request bodies
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistroRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub rol: Rol,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /compras`. The purchase starts `pendiente`; the payment
/// processor moves it along server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompraNueva {
    pub plan_id: u64,
    pub estado: crate::EstadoCompra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultaNueva {
    pub compra_id: u64,
    pub asunto: String,
    pub mensaje_inicial: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanNuevo {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub precio: f64,
    pub tipo: crate::TipoPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duracion_dias: Option<u32>,
    pub cantidad_consultas: u32,
    pub activo: bool,
}

/// Body of `PUT /consultas?id=`: either a lawyer response or a close order,
/// never both.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ActualizarConsulta {
    Responder { respuesta: String },
    Cerrar { cerrar: bool },
}

impl ActualizarConsulta {
    pub fn responder(texto: impl Into<String>) -> Self {
        ActualizarConsulta::Responder {
            respuesta: texto.into(),
        }
    }

    pub fn cerrar() -> Self {
        ActualizarConsulta::Cerrar { cerrar: true }
    }
}

/// Server-side filter of `GET /consultas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccionConsultas {
    /// Open consultations awaiting a lawyer (lawyer dashboard).
    Pendientes,
    /// The client's consultations plus the remaining quota.
    Disponibles,
}

impl AccionConsultas {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccionConsultas::Pendientes => "pendientes",
            AccionConsultas::Disponibles => "disponibles",
        }
    }
}

// =========================================================
// Response envelopes
// =========================================================

/// `POST /auth?action=login|register` success payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SesionResponse {
    pub user: Usuario,
    pub token: String,
}

/// Structured error body of a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct CuerpoError {
    pub error: String,
}

/// `GET /consultas?action=disponibles` payload. Like the list endpoints,
/// this one sometimes answers with a bare array of consultations instead of
/// the wrapping object; a bare array counts as quota 0.
#[derive(Debug, Clone, Default)]
pub struct ConsultasDisponibles {
    pub consultas_disponibles: u32,
    pub consultas: Vec<Consulta>,
}

impl<'de> Deserialize<'de> for ConsultasDisponibles {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Forma {
            Lista(Vec<Consulta>),
            Objeto {
                #[serde(default, deserialize_with = "flex::u32_flexible")]
                consultas_disponibles: u32,
                #[serde(default)]
                consultas: Vec<Consulta>,
            },
        }

        Ok(match Forma::deserialize(d)? {
            Forma::Lista(consultas) => Self {
                consultas_disponibles: 0,
                consultas,
            },
            Forma::Objeto {
                consultas_disponibles,
                consultas,
            } => Self {
                consultas_disponibles,
                consultas,
            },
        })
    }
}

/// A counter that arrives either as a bare number or as `{ "total": n }`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Conteo {
    Numero(#[serde(deserialize_with = "flex::u64_flexible")] u64),
    Total {
        #[serde(deserialize_with = "flex::u64_flexible")]
        total: u64,
    },
}

impl Conteo {
    pub fn valor(&self) -> u64 {
        match *self {
            Conteo::Numero(n) => n,
            Conteo::Total { total } => total,
        }
    }
}

impl Default for Conteo {
    fn default() -> Self {
        Conteo::Numero(0)
    }
}

/// `GET /admin?action=stats` payload.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Estadisticas {
    #[serde(default)]
    pub usuarios: Conteo,
    #[serde(default, deserialize_with = "flex::u64_flexible")]
    pub planes_activos: u64,
    #[serde(default)]
    pub compras: Conteo,
    #[serde(default, deserialize_with = "flex::f64_flexible")]
    pub ingresos_totales: f64,
}

/// Row of `GET /admin?action=abogados`: a lawyer with aggregate counters.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumenAbogado {
    #[serde(deserialize_with = "flex::u64_flexible")]
    pub id: u64,
    pub nombre: String,
    pub email: String,
    #[serde(default, deserialize_with = "flex::u64_flexible")]
    pub total_consultas: u64,
    #[serde(default, deserialize_with = "flex::u64_flexible")]
    pub consultas_respondidas: u64,
    #[serde(default, deserialize_with = "flex::u64_flexible")]
    pub consultas_cerradas: u64,
}

// =========================================================
// List-shape normalization
// =========================================================

/// Decode a list endpoint's payload into one canonical `Vec<T>`.
///
/// Accepted shapes, in order:
/// - a bare array;
/// - an object with the array under `clave`;
/// - any other object, which counts as an empty result (some endpoints
///   answer `{}` when nothing matches).
pub fn extraer_lista<T: DeserializeOwned>(valor: Value, clave: &str) -> Result<Vec<T>, String> {
    match valor {
        Value::Array(_) => serde_json::from_value(valor).map_err(|e| e.to_string()),
        Value::Object(mut mapa) => match mapa.remove(clave) {
            Some(interior @ Value::Array(_)) => {
                serde_json::from_value(interior).map_err(|e| e.to_string())
            }
            Some(otro) => Err(format!(
                "campo '{clave}' con forma inesperada: {otro}"
            )),
            None => Ok(Vec::new()),
        },
        otro => Err(format!("respuesta con forma inesperada: {otro}")),
    }
}
