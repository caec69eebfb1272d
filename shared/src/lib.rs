use serde::{Deserialize, Serialize};

pub mod fecha;
pub mod flex;
pub mod protocol;
pub mod validacion;

#[cfg(test)]
mod tests;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage key holding the opaque session token.
pub const STORAGE_TOKEN_KEY: &str = "token";
/// LocalStorage key holding the serialized [`Usuario`].
pub const STORAGE_USER_KEY: &str = "user";
/// Default base path of the remote API.
pub const API_BASE: &str = "/api";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// Account role. The server owns role assignment; on the client it only
/// selects which dashboard and which calls the UI offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Cliente,
    Abogado,
    Admin,
}

impl Rol {
    /// Dashboard path for this role. Exhaustive on purpose: adding a role
    /// forces a decision here instead of falling through a string match.
    pub fn panel_path(&self) -> &'static str {
        match self {
            Rol::Cliente => "/panel-cliente",
            Rol::Abogado => "/panel-abogado",
            Rol::Admin => "/panel-admin",
        }
    }

    /// Roles a visitor may pick at registration. `admin` is never
    /// self-assignable.
    pub fn asignable_en_registro(&self) -> bool {
        matches!(self, Rol::Cliente | Rol::Abogado)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Cliente => "cliente",
            Rol::Abogado => "abogado",
            Rol::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Rol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    #[serde(deserialize_with = "flex::u64_flexible")]
    pub id: u64,
    pub nombre: String,
    pub email: String,
    pub rol: Rol,
}

/// Purchasable bundle granting a consultation quota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(deserialize_with = "flex::u64_flexible")]
    pub id: u64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(deserialize_with = "flex::f64_flexible")]
    pub precio: f64,
    pub tipo: TipoPlan,
    #[serde(default, deserialize_with = "flex::opt_u32_flexible")]
    pub duracion_dias: Option<u32>,
    #[serde(deserialize_with = "flex::u32_flexible")]
    pub cantidad_consultas: u32,
    #[serde(default = "bool_true", deserialize_with = "flex::bool_flexible")]
    pub activo: bool,
}

fn bool_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoPlan {
    Paquete,
    Suscripcion,
}

/// A client's acquisition of a plan. `consultas_disponibles` is server-side
/// accounting; the client never decrements it locally, it re-fetches after
/// every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compra {
    #[serde(deserialize_with = "flex::u64_flexible")]
    pub id: u64,
    #[serde(default, deserialize_with = "flex::opt_u64_flexible")]
    pub usuario_id: Option<u64>,
    #[serde(default, deserialize_with = "flex::opt_u64_flexible")]
    pub plan_id: Option<u64>,
    #[serde(default)]
    pub plan_nombre: Option<String>,
    #[serde(default, deserialize_with = "flex::f64_flexible")]
    pub monto: f64,
    pub estado: EstadoCompra,
    #[serde(default)]
    pub fecha_compra: Option<String>,
    #[serde(default, deserialize_with = "flex::u32_flexible")]
    pub consultas_disponibles: u32,
    #[serde(default, deserialize_with = "flex::u32_flexible")]
    pub consultas_totales: u32,
    #[serde(default, deserialize_with = "flex::opt_u32_flexible")]
    pub consultas_usadas: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EstadoCompra {
    #[default]
    Pendiente,
    Pagada,
    Rechazada,
    /// The payment gateway occasionally reports states the client does not
    /// model; they all render like a rejection.
    #[serde(other)]
    Otra,
}

impl EstadoCompra {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCompra::Pendiente => "pendiente",
            EstadoCompra::Pagada => "pagada",
            EstadoCompra::Rechazada => "rechazada",
            EstadoCompra::Otra => "otra",
        }
    }
}

impl std::fmt::Display for EstadoCompra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client-initiated legal question ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consulta {
    #[serde(deserialize_with = "flex::u64_flexible")]
    pub id: u64,
    #[serde(default, deserialize_with = "flex::opt_u64_flexible")]
    pub cliente_id: Option<u64>,
    #[serde(default, deserialize_with = "flex::opt_u64_flexible")]
    pub abogado_id: Option<u64>,
    #[serde(default)]
    pub cliente_nombre: Option<String>,
    #[serde(default)]
    pub abogado_nombre: Option<String>,
    pub asunto: String,
    #[serde(default)]
    pub mensaje_inicial: String,
    #[serde(default)]
    pub respuesta: Option<String>,
    pub estado: EstadoConsulta,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
}

/// Consultation lifecycle: abierta -> respondida -> cerrada. The server is
/// the authority on transitions; these predicates only gate the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoConsulta {
    Abierta,
    Respondida,
    Cerrada,
}

impl EstadoConsulta {
    pub fn es_terminal(&self) -> bool {
        matches!(self, EstadoConsulta::Cerrada)
    }

    /// A lawyer may write (or rewrite) a response until the ticket closes.
    pub fn puede_responder(&self) -> bool {
        !self.es_terminal()
    }

    /// Closing is only offered for answered consultations.
    pub fn puede_cerrar(&self) -> bool {
        matches!(self, EstadoConsulta::Respondida)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoConsulta::Abierta => "abierta",
            EstadoConsulta::Respondida => "respondida",
            EstadoConsulta::Cerrada => "cerrada",
        }
    }
}

impl std::fmt::Display for EstadoConsulta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================
// 访问控制 (Route guard policy)
// =========================================================

/// Outcome of the route-guard check for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceso {
    /// Session bootstrap still running: render a neutral placeholder,
    /// never the guarded subtree.
    Cargando,
    Permitir,
    /// No session: send the visitor to the login page.
    RedirigirLogin,
    /// Authenticated but wrong role: silent redirect home, no error.
    RedirigirInicio,
}

/// Pure guard decision. This is a UX convenience only; the server enforces
/// authorization on every call regardless of what the client renders.
pub fn decidir_acceso(
    cargando: bool,
    autenticado: bool,
    rol: Option<Rol>,
    permitidos: &[Rol],
) -> Acceso {
    if cargando {
        return Acceso::Cargando;
    }
    if !autenticado {
        return Acceso::RedirigirLogin;
    }
    match rol {
        Some(r) if permitidos.contains(&r) => Acceso::Permitir,
        _ => Acceso::RedirigirInicio,
    }
}
