//! Session state.
//!
//! Single process-wide holder of the authenticated identity. Mutated only by
//! login/register/logout/bootstrap; read by the route guard, the navbar and
//! (through [`token_almacenado`]) by every outgoing request.

use abogadolinea_shared::protocol::{LoginRequest, RegistroRequest, SesionResponse};
use abogadolinea_shared::{Rol, Usuario, STORAGE_TOKEN_KEY, STORAGE_USER_KEY};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::api::{ApiClient, ApiError};

#[derive(Clone)]
pub struct AuthState {
    pub usuario: Option<Usuario>,
    pub token: Option<String>,
    /// True only while the storage bootstrap runs, never afterwards.
    pub cargando: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            usuario: None,
            token: None,
            cargando: true,
        }
    }
}

impl AuthState {
    pub fn autenticado(&self) -> bool {
        self.token.is_some()
    }

    pub fn rol(&self) -> Option<Rol> {
        self.usuario.as_ref().map(|u| u.rol)
    }
}

/// Session context shared through Leptos Context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub estado: ReadSignal<AuthState>,
    pub set_estado: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (estado, set_estado) = signal(AuthState::default());
        Self { estado, set_estado }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

// =========================================================
// Storage accessors
// =========================================================

pub fn token_almacenado() -> Option<String> {
    LocalStorage::get::<String>(STORAGE_TOKEN_KEY).ok()
}

fn usuario_almacenado() -> Option<Usuario> {
    LocalStorage::get::<Usuario>(STORAGE_USER_KEY).ok()
}

fn persistir_sesion(sesion: &SesionResponse) {
    let _ = LocalStorage::set(STORAGE_TOKEN_KEY, &sesion.token);
    let _ = LocalStorage::set(STORAGE_USER_KEY, &sesion.user);
}

fn limpiar_sesion() {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    LocalStorage::delete(STORAGE_USER_KEY);
}

// =========================================================
// Lifecycle
// =========================================================

/// Restore the session from LocalStorage, synchronously. Both keys are
/// required together; a half-written session counts as logged out.
pub fn init_auth(ctx: &AuthContext) {
    let restaurado = match (token_almacenado(), usuario_almacenado()) {
        (Some(token), Some(usuario)) => Some((token, usuario)),
        _ => None,
    };
    if restaurado.is_none() {
        limpiar_sesion();
    }
    ctx.set_estado.update(|estado| {
        if let Some((token, usuario)) = restaurado {
            estado.token = Some(token);
            estado.usuario = Some(usuario);
        }
        estado.cargando = false;
    });
}

/// Log in. On success the session is persisted and the context updated; on
/// failure the prior session (if any) is left untouched and the server's
/// message is returned unmodified.
pub async fn iniciar_sesion(
    ctx: &AuthContext,
    api: &ApiClient,
    credenciales: &LoginRequest,
) -> Result<Usuario, ApiError> {
    let sesion = api.login(credenciales).await?;
    establecer(ctx, sesion)
}

/// Register and log in, same contract as [`iniciar_sesion`].
pub async fn registrar(
    ctx: &AuthContext,
    api: &ApiClient,
    datos: &RegistroRequest,
) -> Result<Usuario, ApiError> {
    let sesion = api.registrar(datos).await?;
    establecer(ctx, sesion)
}

fn establecer(ctx: &AuthContext, sesion: SesionResponse) -> Result<Usuario, ApiError> {
    persistir_sesion(&sesion);
    let usuario = sesion.user.clone();
    ctx.set_estado.update(|estado| {
        estado.token = Some(sesion.token);
        estado.usuario = Some(sesion.user);
        estado.cargando = false;
    });
    Ok(usuario)
}

/// Clear the persisted session and the in-memory state. Idempotent: calling
/// it while logged out is a no-op.
pub fn cerrar_sesion(ctx: &AuthContext) {
    limpiar_sesion();
    ctx.set_estado.update(|estado| {
        estado.token = None;
        estado.usuario = None;
        estado.cargando = false;
    });
}
