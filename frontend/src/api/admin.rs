//! Admin endpoints: `GET /admin?action=...`.

use abogadolinea_shared::protocol::{extraer_lista, Estadisticas, ResumenAbogado};
use abogadolinea_shared::{Compra, EstadoCompra, Rol, Usuario};
use serde_json::Value;

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn admin_estadisticas(&self) -> Result<Estadisticas, ApiError> {
        self.get_json("/admin?action=stats").await
    }

    pub async fn admin_usuarios(
        &self,
        page: u32,
        limit: u32,
        rol: Option<Rol>,
    ) -> Result<Vec<Usuario>, ApiError> {
        let mut path = format!("/admin?action=users&page={page}&limit={limit}");
        if let Some(rol) = rol {
            path.push_str(&format!("&rol={rol}"));
        }
        let valor: Value = self.get_json(&path).await?;
        extraer_lista(valor, "usuarios").map_err(ApiError::Decodificacion)
    }

    pub async fn admin_abogados(&self) -> Result<Vec<ResumenAbogado>, ApiError> {
        let valor: Value = self.get_json("/admin?action=abogados").await?;
        extraer_lista(valor, "abogados").map_err(ApiError::Decodificacion)
    }

    pub async fn admin_compras(
        &self,
        page: u32,
        limit: u32,
        estado: Option<EstadoCompra>,
    ) -> Result<Vec<Compra>, ApiError> {
        let mut path = format!("/admin?action=compras&page={page}&limit={limit}");
        if let Some(estado) = estado {
            path.push_str(&format!("&estado={estado}"));
        }
        let valor: Value = self.get_json(&path).await?;
        extraer_lista(valor, "compras").map_err(ApiError::Decodificacion)
    }
}
