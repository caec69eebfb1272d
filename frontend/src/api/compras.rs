//! Purchases: `GET/POST /compras`.

use abogadolinea_shared::protocol::{extraer_lista, CompraNueva};
use abogadolinea_shared::Compra;
use serde_json::Value;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Without `id` the server answers with the caller's own purchases.
    pub async fn obtener_compras(&self, id: Option<u64>) -> Result<Vec<Compra>, ApiError> {
        let path = match id {
            Some(id) => format!("/compras?id={id}"),
            None => "/compras".to_string(),
        };
        let valor: Value = self.get_json(&path).await?;
        extraer_lista(valor, "compras").map_err(ApiError::Decodificacion)
    }

    pub async fn crear_compra(&self, datos: &CompraNueva) -> Result<Value, ApiError> {
        self.post_json("/compras", datos).await
    }
}
