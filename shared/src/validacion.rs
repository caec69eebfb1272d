//! Local form validation.
//!
//! These checks run before any request leaves the browser; a failure here
//! means no network round-trip at all. Messages are shown inline, verbatim.

use crate::protocol::{ConsultaNueva, LoginRequest, RegistroRequest};
use crate::Rol;

pub const MIN_PASSWORD: usize = 6;

pub struct FormularioRegistro<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirmar: &'a str,
    pub rol: Rol,
}

/// Validate the registration form and build the request body.
pub fn validar_registro(form: &FormularioRegistro<'_>) -> Result<RegistroRequest, String> {
    if form.nombre.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty() {
        return Err("Todos los campos son obligatorios".to_string());
    }
    if form.password != form.confirmar {
        return Err("Las contraseñas no coinciden".to_string());
    }
    if form.password.chars().count() < MIN_PASSWORD {
        return Err("La contraseña debe tener al menos 6 caracteres".to_string());
    }
    if !form.rol.asignable_en_registro() {
        return Err("Rol no permitido".to_string());
    }
    Ok(RegistroRequest {
        nombre: form.nombre.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.to_string(),
        rol: form.rol,
    })
}

pub fn validar_login(email: &str, password: &str) -> Result<LoginRequest, String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Todos los campos son obligatorios".to_string());
    }
    Ok(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

/// Validate the new-consultation dialog. `compra_id` is `None` while the
/// selector still shows its placeholder.
pub fn validar_nueva_consulta(
    compra_id: Option<u64>,
    asunto: &str,
    mensaje: &str,
) -> Result<ConsultaNueva, String> {
    let Some(compra_id) = compra_id else {
        return Err("Todos los campos son obligatorios".to_string());
    };
    if asunto.trim().is_empty() || mensaje.trim().is_empty() {
        return Err("Todos los campos son obligatorios".to_string());
    }
    Ok(ConsultaNueva {
        compra_id,
        asunto: asunto.trim().to_string(),
        mensaje_inicial: mensaje.trim().to_string(),
    })
}

/// A lawyer response must carry text; whitespace does not count.
pub fn validar_respuesta(texto: &str) -> Result<String, String> {
    let texto = texto.trim();
    if texto.is_empty() {
        return Err("Debes escribir una respuesta".to_string());
    }
    Ok(texto.to_string())
}
