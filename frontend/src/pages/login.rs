//! Login page.

use abogadolinea_shared::validacion::validar_login;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::auth::{iniciar_sesion, use_auth};
use crate::components::layout::Layout;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (enviando, set_enviando) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // Already authenticated: straight to the matching dashboard.
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let estado = auth.estado.get();
            if !estado.cargando {
                if let Some(rol) = estado.rol() {
                    navigate(rol.panel_path(), Default::default());
                }
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let credenciales = match validar_login(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(mensaje) => {
                set_error.set(Some(mensaje));
                return;
            }
        };

        set_enviando.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match iniciar_sesion(&auth, &api, &credenciales).await {
                Ok(usuario) => navigate(usuario.rol.panel_path(), Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_enviando.set(false);
        });
    };

    view! {
        <Layout>
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="card w-full max-w-md bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h1 class="text-3xl font-bold text-center">"Iniciar Sesión"</h1>
                        <p class="text-center opacity-70 mb-2">
                            "Accede a tu cuenta para continuar"
                        </p>

                        <Show when=move || error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <form on:submit=on_submit>
                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class="input input-bordered w-full"
                                    autocomplete="email"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Contraseña"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class="input input-bordered w-full"
                                    autocomplete="current-password"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary w-full" disabled=move || enviando.get()>
                                    {move || if enviando.get() {
                                        "Iniciando sesión..."
                                    } else {
                                        "Iniciar Sesión"
                                    }}
                                </button>
                            </div>
                        </form>

                        <p class="text-center text-sm mt-4">
                            "¿No tienes cuenta? "
                            <A href="/register" attr:class="link link-primary">"Regístrate aquí"</A>
                        </p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
