//! Auth endpoints: `POST /auth?action=...`.

use abogadolinea_shared::protocol::{LoginRequest, RegistroRequest, SesionResponse};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn login(&self, credenciales: &LoginRequest) -> Result<SesionResponse, ApiError> {
        self.post_json("/auth?action=login", credenciales).await
    }

    pub async fn registrar(&self, datos: &RegistroRequest) -> Result<SesionResponse, ApiError> {
        self.post_json("/auth?action=register", datos).await
    }
}
