//! Registration page. Account type is cliente or abogado; admin accounts are
//! never self-assignable.

use abogadolinea_shared::validacion::{validar_registro, FormularioRegistro};
use abogadolinea_shared::Rol;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::auth::{registrar, use_auth};
use crate::components::layout::Layout;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let (nombre, set_nombre) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (rol, set_rol) = signal(Rol::Cliente);
    let (password, set_password) = signal(String::new());
    let (confirmar, set_confirmar) = signal(String::new());
    let (enviando, set_enviando) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let form = FormularioRegistro {
            nombre: &nombre.get(),
            email: &email.get(),
            password: &password.get(),
            confirmar: &confirmar.get(),
            rol: rol.get(),
        };
        let datos = match validar_registro(&form) {
            Ok(d) => d,
            Err(mensaje) => {
                set_error.set(Some(mensaje));
                return;
            }
        };

        set_enviando.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match registrar(&auth, &api, &datos).await {
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
                        <h1 class="text-3xl font-bold text-center">"Registrarse"</h1>
                        <p class="text-center opacity-70 mb-2">"Crea tu cuenta para comenzar"</p>

                        <Show when=move || error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <form on:submit=on_submit>
                            <div class="form-control">
                                <label class="label" for="nombre">
                                    <span class="label-text">"Nombre completo"</span>
                                </label>
                                <input
                                    id="nombre"
                                    type="text"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_nombre.set(event_target_value(&ev))
                                    prop:value=nombre
                                    required
                                />
                            </div>
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
                                <label class="label" for="rol">
                                    <span class="label-text">"Tipo de cuenta"</span>
                                </label>
                                <select
                                    id="rol"
                                    class="select select-bordered w-full"
                                    on:change=move |ev| {
                                        // The form only offers the two self-assignable roles.
                                        set_rol.set(match event_target_value(&ev).as_str() {
                                            "abogado" => Rol::Abogado,
                                            _ => Rol::Cliente,
                                        });
                                    }
                                >
                                    <option value="cliente" selected>"Cliente"</option>
                                    <option value="abogado">"Abogado"</option>
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Contraseña"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    class="input input-bordered w-full"
                                    autocomplete="new-password"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    required
                                />
                                <span class="label-text-alt mt-1 opacity-70">
                                    "Mínimo 6 caracteres"
                                </span>
                            </div>
                            <div class="form-control">
                                <label class="label" for="confirmar">
                                    <span class="label-text">"Confirmar contraseña"</span>
                                </label>
                                <input
                                    id="confirmar"
                                    type="password"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_confirmar.set(event_target_value(&ev))
                                    prop:value=confirmar
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary w-full" disabled=move || enviando.get()>
                                    {move || if enviando.get() { "Registrando..." } else { "Registrarse" }}
                                </button>
                            </div>
                        </form>

                        <p class="text-center text-sm mt-4">
                            "¿Ya tienes cuenta? "
                            <A href="/login" attr:class="link link-primary">"Inicia sesión aquí"</A>
                        </p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
