//! Shell: top bar with role-aware links + page container.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::{cerrar_sesion, use_auth};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        cerrar_sesion(&auth);
        navigate("/", Default::default());
    };

    view! {
        <div class="navbar bg-primary text-primary-content shadow-lg">
            <div class="flex-1">
                <A href="/" attr:class="btn btn-ghost text-xl">"Tu Abogado en Línea"</A>
            </div>
            <div class="flex-none gap-2">
                {move || {
                    let estado = auth.estado.get();
                    match estado.usuario {
                        Some(usuario) => view! {
                            <A href=usuario.rol.panel_path() attr:class="btn btn-ghost">"Panel"</A>
                            <A href="/planes" attr:class="btn btn-ghost">"Planes"</A>
                            <span class="px-2 hidden md:inline">{usuario.nombre.clone()}</span>
                            <button class="btn btn-ghost" on:click=on_logout.clone()>"Salir"</button>
                        }
                        .into_any(),
                        None => view! {
                            <A href="/login" attr:class="btn btn-ghost">"Iniciar Sesión"</A>
                            <A href="/register" attr:class="btn btn-ghost">"Registrarse"</A>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <Navbar />
        <main class="container mx-auto max-w-6xl px-4 py-8">{children()}</main>
    }
}
