//! Consultations: `GET/POST/PUT /consultas`.

use abogadolinea_shared::protocol::{
    extraer_lista, AccionConsultas, ActualizarConsulta, ConsultaNueva, ConsultasDisponibles,
};
use abogadolinea_shared::Consulta;
use serde_json::Value;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Raw `GET /consultas` with the optional filters the server supports.
    pub async fn obtener_consultas(
        &self,
        id: Option<u64>,
        accion: Option<AccionConsultas>,
    ) -> Result<Value, ApiError> {
        let mut path = String::from("/consultas");
        let mut sep = '?';
        if let Some(id) = id {
            path.push_str(&format!("{sep}id={id}"));
            sep = '&';
        }
        if let Some(accion) = accion {
            path.push_str(&format!("{sep}action={}", accion.as_str()));
        }
        self.get_json(&path).await
    }

    /// Lawyer view: every consultation visible to the lawyer, the open ones
    /// first in server order.
    pub async fn consultas_pendientes(&self) -> Result<Vec<Consulta>, ApiError> {
        let valor = self
            .obtener_consultas(None, Some(AccionConsultas::Pendientes))
            .await?;
        extraer_lista(valor, "consultas").map_err(ApiError::Decodificacion)
    }

    /// Client view: own consultations plus the remaining quota.
    pub async fn consultas_disponibles(&self) -> Result<ConsultasDisponibles, ApiError> {
        let valor = self
            .obtener_consultas(None, Some(AccionConsultas::Disponibles))
            .await?;
        serde_json::from_value(valor).map_err(|e| ApiError::Decodificacion(e.to_string()))
    }

    pub async fn crear_consulta(&self, datos: &ConsultaNueva) -> Result<Value, ApiError> {
        self.post_json("/consultas", datos).await
    }

    /// Request a state transition. The server is the authority; the caller
    /// re-fetches instead of trusting this payload.
    pub async fn actualizar_consulta(
        &self,
        id: u64,
        cambio: &ActualizarConsulta,
    ) -> Result<Value, ApiError> {
        self.put_json(&format!("/consultas?id={id}"), cambio).await
    }
}
