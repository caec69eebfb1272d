//! Route guard.
//!
//! UX convenience only: the server still checks authorization on every call.
//! While the session bootstrap runs a neutral spinner renders, never the
//! guarded subtree, so nothing protected can flash before the check resolves.

use abogadolinea_shared::{decidir_acceso, Acceso, Rol};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::auth::use_auth;

#[component]
pub fn ProtectedRoute(
    /// Roles admitted to the wrapped view.
    roles: &'static [Rol],
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let children = StoredValue::new(children);

    view! {
        {move || {
            let estado = auth.estado.get();
            match decidir_acceso(estado.cargando, estado.autenticado(), estado.rol(), roles) {
                Acceso::Cargando => view! {
                    <div class="flex items-center justify-center min-h-screen">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
                .into_any(),
                Acceso::RedirigirLogin => {
                    log!("[Guard] Sin sesión. Redirigiendo a /login.");
                    view! { <Redirect path="/login" /> }.into_any()
                }
                Acceso::RedirigirInicio => {
                    log!("[Guard] Rol no permitido. Redirigiendo a /.");
                    view! { <Redirect path="/" /> }.into_any()
                }
                Acceso::Permitir => children.with_value(|render| render()).into_any(),
            }
        }}
    }
}
