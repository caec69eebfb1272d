//! Public plans catalogue with the purchase entry point.

use abogadolinea_shared::protocol::CompraNueva;
use abogadolinea_shared::{EstadoCompra, Plan, Rol, TipoPlan};
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::layout::Layout;

#[component]
pub fn PlanesPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();

    let (planes, set_planes) = signal(Vec::<Plan>::new());
    let (cargando, set_cargando) = signal(true);
    let (error_carga, set_error_carga) = signal(Option::<String>::None);
    let (comprando, set_comprando) = signal(Option::<u64>::None);
    let (aviso, set_aviso) = signal(Option::<(String, bool)>::None); // mensaje, es error

    let cargar_planes = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_cargando.set(true);
            set_error_carga.set(None);
            spawn_local(async move {
                match api.obtener_planes(1, 50).await {
                    Ok(lista) => set_planes.set(lista),
                    Err(e) => {
                        error!("[Planes] carga fallida: {e}");
                        set_error_carga.set(Some(format!("Error al cargar los planes: {e}")));
                    }
                }
                set_cargando.set(false);
            });
        }
    };

    // 初始加载
    {
        let cargar_planes = cargar_planes.clone();
        Effect::new(move |_| {
            cargar_planes();
        });
    }

    // Notifications clear themselves after 3 s.
    Effect::new(move |_| {
        if aviso.get().is_some() {
            set_timeout(
                move || set_aviso.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let comprar = {
        let api = api.clone();
        move |plan_id: u64| {
            let estado = auth.estado.get_untracked();
            if !estado.autenticado() {
                set_aviso.set(Some((
                    "Debes iniciar sesión para comprar un plan".to_string(),
                    true,
                )));
                return;
            }
            if estado.rol() != Some(Rol::Cliente) {
                set_aviso.set(Some((
                    "Solo los clientes pueden comprar planes".to_string(),
                    true,
                )));
                return;
            }

            let api = api.clone();
            set_comprando.set(Some(plan_id));
            spawn_local(async move {
                let datos = CompraNueva {
                    plan_id,
                    estado: EstadoCompra::Pendiente,
                };
                match api.crear_compra(&datos).await {
                    Ok(_) => set_aviso.set(Some((
                        "Compra iniciada. Serás redirigido al sistema de pago.".to_string(),
                        false,
                    ))),
                    Err(e) => set_aviso.set(Some((format!("Error al crear la compra: {e}"), true))),
                }
                set_comprando.set(None);
            });
        }
    };

    let es_cliente = move || auth.estado.get().rol() == Some(Rol::Cliente);

    view! {
        <Layout>
            <h1 class="text-3xl font-bold text-center mb-8">"Planes de Consultas Legales"</h1>

            <Show when=move || aviso.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class=move || {
                        if aviso.get().map(|(_, es_error)| es_error).unwrap_or(false) {
                            "alert alert-error shadow-lg"
                        } else {
                            "alert alert-success shadow-lg"
                        }
                    }>
                        <span>{move || aviso.get().map(|(m, _)| m).unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <Show when=move || error_carga.get().is_some()>
                <div role="alert" class="alert alert-error mb-4">
                    <span>{move || error_carga.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || cargando.get()>
                <div class="flex justify-center p-8">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                <For
                    each=move || planes.get()
                    key=|plan| plan.id
                    children=move |plan| {
                        let id = plan.id;
                        let activo = plan.activo;
                        let comprar = comprar.clone();
                        view! {
                            <div class=move || {
                                if activo {
                                    "card bg-base-100 shadow-xl border-2 border-primary"
                                } else {
                                    "card bg-base-100 shadow-xl border border-base-300"
                                }
                            }>
                                <div class="card-body">
                                    <div class="flex justify-between items-start">
                                        <h2 class="card-title">{plan.nombre.clone()}</h2>
                                        <Show when=move || !activo>
                                            <span class="badge">"Inactivo"</span>
                                        </Show>
                                    </div>

                                    {plan.descripcion.clone().map(|d| view! {
                                        <p class="text-sm opacity-70">{d}</p>
                                    })}

                                    <p class="text-4xl font-bold my-2">
                                        {format!("${:.2}", plan.precio)}
                                    </p>

                                    <div class="flex items-center gap-2">
                                        <span class=move || match plan.tipo {
                                            TipoPlan::Paquete => "badge badge-primary",
                                            TipoPlan::Suscripcion => "badge badge-secondary",
                                        }>
                                            {match plan.tipo {
                                                TipoPlan::Paquete => "Paquete",
                                                TipoPlan::Suscripcion => "Suscripción",
                                            }}
                                        </span>
                                        {plan.duracion_dias.map(|dias| view! {
                                            <span class="text-sm opacity-70">
                                                {format!("Duración: {dias} días")}
                                            </span>
                                        })}
                                    </div>

                                    <p class="mt-2">
                                        {format!(
                                            "{} consulta{}",
                                            plan.cantidad_consultas,
                                            if plan.cantidad_consultas == 1 { "" } else { "s" },
                                        )}
                                    </p>

                                    <div class="card-actions mt-4">
                                        <button
                                            class="btn btn-primary w-full"
                                            disabled=move || {
                                                !activo
                                                    || comprando.get() == Some(id)
                                                    || !es_cliente()
                                            }
                                            on:click=move |_| comprar(id)
                                        >
                                            {move || {
                                                if comprando.get() == Some(id) {
                                                    "Procesando..."
                                                } else if !es_cliente() {
                                                    "Solo para clientes"
                                                } else {
                                                    "Comprar Plan"
                                                }
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || planes.get().is_empty() && !cargando.get()>
                <div role="alert" class="alert alert-info mt-6">
                    <span>"No hay planes disponibles en este momento."</span>
                </div>
            </Show>
        </Layout>
    }
}
