//! Client dashboard: remaining quota, own consultations, purchase history.

use abogadolinea_shared::protocol::ConsultaNueva;
use abogadolinea_shared::{fecha, Compra, Consulta, EstadoConsulta, Rol};
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::layout::Layout;
use crate::components::nueva_consulta_dialog::NuevaConsultaDialog;
use crate::components::protected_route::ProtectedRoute;

fn clase_estado(estado: EstadoConsulta) -> &'static str {
    match estado {
        EstadoConsulta::Abierta => "badge badge-warning",
        EstadoConsulta::Respondida => "badge badge-success",
        EstadoConsulta::Cerrada => "badge badge-ghost",
    }
}

#[component]
pub fn PanelClientePage() -> impl IntoView {
    view! {
        <ProtectedRoute roles=&[Rol::Cliente]>
            <PanelCliente />
        </ProtectedRoute>
    }
}

#[component]
fn PanelCliente() -> impl IntoView {
    let api = use_api();

    let (disponibles, set_disponibles) = signal(0u32);
    let (consultas, set_consultas) = signal(Vec::<Consulta>::new());
    let (compras, set_compras) = signal(Vec::<Compra>::new());
    let (cargando, set_cargando) = signal(true);
    let (detalle, set_detalle) = signal(Option::<Consulta>::None);
    let (aviso, set_aviso) = signal(Option::<(String, bool)>::None);

    // Quota and purchases live on disjoint endpoints; fetch them together
    // and render once both settle.
    let cargar_datos = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_cargando.set(true);
            spawn_local(async move {
                let (res_consultas, res_compras) =
                    futures::join!(api.consultas_disponibles(), api.obtener_compras(None));
                match res_consultas {
                    Ok(datos) => {
                        set_disponibles.set(datos.consultas_disponibles);
                        set_consultas.set(datos.consultas);
                    }
                    Err(e) => {
                        error!("[PanelCliente] consultas: {e}");
                        set_aviso.set(Some(("Error al cargar los datos".to_string(), true)));
                    }
                }
                match res_compras {
                    Ok(lista) => set_compras.set(lista),
                    Err(e) => {
                        error!("[PanelCliente] compras: {e}");
                        set_aviso.set(Some(("Error al cargar los datos".to_string(), true)));
                    }
                }
                set_cargando.set(false);
            });
        }
    };

    {
        let cargar_datos = cargar_datos.clone();
        Effect::new(move |_| cargar_datos());
    }

    Effect::new(move |_| {
        if aviso.get().is_some() {
            set_timeout(
                move || set_aviso.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let crear_consulta = {
        let api = api.clone();
        let cargar_datos = cargar_datos.clone();
        Callback::new(move |datos: ConsultaNueva| {
            let api = api.clone();
            let cargar_datos = cargar_datos.clone();
            spawn_local(async move {
                match api.crear_consulta(&datos).await {
                    Ok(_) => {
                        set_aviso.set(Some(("Consulta creada exitosamente".to_string(), false)));
                        // Quota accounting is server-side: re-fetch, never decrement.
                        cargar_datos();
                    }
                    Err(e) => {
                        set_aviso.set(Some((format!("Error al crear la consulta: {e}"), true)));
                    }
                }
            });
        })
    };

    view! {
        <Layout>
            <h1 class="text-3xl font-bold mb-6">"Panel de Cliente"</h1>

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

            <Show
                when=move || !cargando.get()
                fallback=|| view! {
                    <div class="flex justify-center p-8">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100 mb-8">
                    <div class="stat">
                        <div class="stat-title">"Consultas Disponibles"</div>
                        <div class="stat-value text-primary">{move || disponibles.get()}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Compras Realizadas"</div>
                        <div class="stat-value text-secondary">
                            {move || compras.get().len()}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Consultas Totales"</div>
                        <div class="stat-value">{move || consultas.get().len()}</div>
                    </div>
                </div>

                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-2xl font-bold">"Mis Consultas"</h2>
                    <NuevaConsultaDialog
                        compras=Signal::derive(move || compras.get())
                        habilitado=Signal::derive(move || disponibles.get() > 0)
                        on_crear=crear_consulta
                    />
                </div>

                <Show when=move || disponibles.get() == 0>
                    <div role="alert" class="alert alert-info mb-4">
                        <span>
                            "No tienes consultas disponibles. Compra un plan para obtener consultas."
                        </span>
                    </div>
                </Show>

                <div class="overflow-x-auto">
                    <table class="table table-zebra w-full bg-base-100">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Asunto"</th>
                                <th>"Estado"</th>
                                <th>"Abogado"</th>
                                <th>"Fecha Creación"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || consultas.get()
                                key=|c| c.id
                                children=move |consulta| {
                                    let abrir = consulta.clone();
                                    view! {
                                        <tr>
                                            <td>{consulta.id}</td>
                                            <td>{consulta.asunto.clone()}</td>
                                            <td>
                                                <span class=clase_estado(consulta.estado)>
                                                    {consulta.estado.as_str()}
                                                </span>
                                            </td>
                                            <td>
                                                {consulta
                                                    .abogado_nombre
                                                    .clone()
                                                    .unwrap_or_else(|| "Sin asignar".into())}
                                            </td>
                                            <td>{fecha::fecha_hora(consulta.fecha_creacion.as_deref())}</td>
                                            <td>
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    on:click=move |_| set_detalle.set(Some(abrir.clone()))
                                                >
                                                    "Ver"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Show when=move || consultas.get().is_empty()>
                    <div role="alert" class="alert alert-info mt-4">
                        <span>"No tienes consultas realizadas."</span>
                    </div>
                </Show>
            </Show>

            // Read-only detail of one of the client's consultations
            <Show when=move || detalle.get().is_some()>
                <dialog class="modal modal-open">
                    <div class="modal-box max-w-2xl">
                        {move || detalle.get().map(|consulta| view! {
                            <h3 class="font-bold text-lg">
                                {format!("Consulta #{} - {}", consulta.id, consulta.asunto)}
                            </h3>
                            <div class="mt-4 space-y-3">
                                <div>
                                    <p class="font-semibold text-sm">"Mensaje"</p>
                                    <p class="whitespace-pre-wrap">{consulta.mensaje_inicial.clone()}</p>
                                </div>
                                <div>
                                    <p class="font-semibold text-sm">"Respuesta"</p>
                                    <p class="whitespace-pre-wrap">
                                        {consulta
                                            .respuesta
                                            .clone()
                                            .unwrap_or_else(|| "Sin respuesta aún".into())}
                                    </p>
                                </div>
                            </div>
                        })}
                        <div class="modal-action">
                            <button class="btn" on:click=move |_| set_detalle.set(None)>
                                "Cerrar"
                            </button>
                        </div>
                    </div>
                </dialog>
            </Show>
        </Layout>
    }
}
