//! Tu Abogado en Línea — SPA cliente
//!
//! Thin presentation layer over the remote consultation API:
//! - `auth`: session state (user + token) persisted in LocalStorage
//! - `api`: HTTP adapter + one service module per remote resource
//! - `components`: layout, route guard and dialogs
//! - `pages`: public pages and the three role dashboards

mod api;
mod auth;
mod components {
    pub mod layout;
    pub mod nueva_consulta_dialog;
    pub mod protected_route;
    pub mod responder_dialog;
}
mod pages {
    pub mod home;
    pub mod login;
    pub mod panel_abogado;
    pub mod panel_admin;
    pub mod panel_cliente;
    pub mod planes;
    pub mod register;
}

use abogadolinea_shared::API_BASE;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::auth::{init_auth, AuthContext};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::panel_abogado::PanelAbogadoPage;
use crate::pages::panel_admin::PanelAdminPage;
use crate::pages::panel_cliente::PanelClientePage;
use crate::pages::planes::PlanesPage;
use crate::pages::register::RegisterPage;

#[component]
pub fn App() -> impl IntoView {
    // 1. HTTP adapter, shared by every page through Context
    provide_context(ApiClient::new(API_BASE));

    // 2. Session context + synchronous restore from LocalStorage
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 3. Route table; unknown paths fall back to a redirect home
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/planes") view=PlanesPage />
                <Route path=path!("/panel-cliente") view=PanelClientePage />
                <Route path=path!("/panel-abogado") view=PanelAbogadoPage />
                <Route path=path!("/panel-admin") view=PanelAdminPage />
            </Routes>
        </Router>
    }
}
