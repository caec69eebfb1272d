//! Plans: `GET/POST /planes`.

use abogadolinea_shared::protocol::{extraer_lista, PlanNuevo};
use abogadolinea_shared::Plan;
use serde_json::Value;

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn obtener_planes(&self, page: u32, limit: u32) -> Result<Vec<Plan>, ApiError> {
        let valor: Value = self
            .get_json(&format!("/planes?page={page}&limit={limit}"))
            .await?;
        extraer_lista(valor, "planes").map_err(ApiError::Decodificacion)
    }

    pub async fn obtener_plan(&self, id: u64) -> Result<Plan, ApiError> {
        self.get_json(&format!("/planes?id={id}")).await
    }

    /// Create a plan (admin). The payload is returned as-is; callers today
    /// only care about success.
    pub async fn crear_plan(&self, datos: &PlanNuevo) -> Result<Value, ApiError> {
        self.post_json("/planes", datos).await
    }
}
