//! Lawyer dashboard: pending queue plus a history of answered work.

use abogadolinea_shared::protocol::ActualizarConsulta;
use abogadolinea_shared::{fecha, Consulta, EstadoConsulta, Rol};
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;
use crate::components::responder_dialog::ResponderDialog;

fn clase_estado(estado: EstadoConsulta) -> &'static str {
    match estado {
        EstadoConsulta::Abierta => "badge badge-warning",
        EstadoConsulta::Respondida => "badge badge-success",
        EstadoConsulta::Cerrada => "badge badge-ghost",
    }
}

#[component]
pub fn PanelAbogadoPage() -> impl IntoView {
    view! {
        <ProtectedRoute roles=&[Rol::Abogado]>
            <PanelAbogado />
        </ProtectedRoute>
    }
}

#[component]
fn PanelAbogado() -> impl IntoView {
    let api = use_api();

    let (consultas, set_consultas) = signal(Vec::<Consulta>::new());
    let (cargando, set_cargando) = signal(true);
    let (aviso, set_aviso) = signal(Option::<(String, bool)>::None);
    let seleccionada = RwSignal::new(Option::<Consulta>::None);

    let cargar_consultas = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_cargando.set(true);
            spawn_local(async move {
                match api.consultas_pendientes().await {
                    Ok(lista) => set_consultas.set(lista),
                    Err(e) => {
                        error!("[PanelAbogado] carga fallida: {e}");
                        set_aviso.set(Some(("Error al cargar las consultas".to_string(), true)));
                    }
                }
                set_cargando.set(false);
            });
        }
    };

    // 初始加载
    {
        let cargar_consultas = cargar_consultas.clone();
        Effect::new(move |_| cargar_consultas());
    }

    Effect::new(move |_| {
        if aviso.get().is_some() {
            set_timeout(
                move || set_aviso.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let responder = {
        let api = api.clone();
        let cargar_consultas = cargar_consultas.clone();
        Callback::new(move |(id, texto): (u64, String)| {
            let api = api.clone();
            let cargar_consultas = cargar_consultas.clone();
            spawn_local(async move {
                match api
                    .actualizar_consulta(id, &ActualizarConsulta::responder(texto))
                    .await
                {
                    Ok(_) => {
                        set_aviso
                            .set(Some(("Respuesta enviada exitosamente".to_string(), false)));
                        // Leave the dialog visible for a beat before refreshing.
                        set_timeout(
                            move || {
                                seleccionada.set(None);
                                cargar_consultas();
                            },
                            std::time::Duration::from_secs(1),
                        );
                    }
                    Err(e) => {
                        set_aviso.set(Some((format!("Error al enviar la respuesta: {e}"), true)));
                    }
                }
            });
        })
    };

    let cerrar = {
        let api = api.clone();
        let cargar_consultas = cargar_consultas.clone();
        move |id: u64| {
            let confirmado = window()
                .confirm_with_message("¿Deseas cerrar esta consulta?")
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let api = api.clone();
            let cargar_consultas = cargar_consultas.clone();
            spawn_local(async move {
                match api
                    .actualizar_consulta(id, &ActualizarConsulta::cerrar())
                    .await
                {
                    Ok(_) => {
                        set_aviso.set(Some(("Consulta cerrada".to_string(), false)));
                        cargar_consultas();
                    }
                    Err(e) => {
                        set_aviso.set(Some((format!("Error al cerrar la consulta: {e}"), true)));
                    }
                }
            });
        }
    };

    let pendientes = move || {
        consultas
            .get()
            .into_iter()
            .filter(|c| c.estado == EstadoConsulta::Abierta)
            .collect::<Vec<_>>()
    };
    let historial = move || {
        consultas
            .get()
            .into_iter()
            .filter(|c| c.estado != EstadoConsulta::Abierta)
            .collect::<Vec<_>>()
    };

    view! {
        <Layout>
            <h1 class="text-3xl font-bold mb-6">"Panel de Abogado"</h1>

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
                        <div class="stat-title">"Consultas Pendientes"</div>
                        <div class="stat-value text-warning">{move || pendientes().len()}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Consultas Atendidas"</div>
                        <div class="stat-value text-success">{move || historial().len()}</div>
                    </div>
                </div>

                <h2 class="text-2xl font-bold mb-4">"Consultas Pendientes"</h2>
                <div class="overflow-x-auto mb-4">
                    <table class="table table-zebra w-full bg-base-100">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Cliente"</th>
                                <th>"Asunto"</th>
                                <th>"Fecha"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=pendientes
                                key=|c| c.id
                                children=move |consulta| {
                                    let abrir = consulta.clone();
                                    view! {
                                        <tr>
                                            <td>{consulta.id}</td>
                                            <td>
                                                {consulta
                                                    .cliente_nombre
                                                    .clone()
                                                    .unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td>{consulta.asunto.clone()}</td>
                                            <td>{fecha::fecha_hora(consulta.fecha_creacion.as_deref())}</td>
                                            <td>
                                                <button
                                                    class="btn btn-primary btn-sm"
                                                    on:click=move |_| seleccionada.set(Some(abrir.clone()))
                                                >
                                                    "Responder"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Show when=move || pendientes().is_empty()>
                    <div role="alert" class="alert alert-info mb-8">
                        <span>"No hay consultas pendientes por responder."</span>
                    </div>
                </Show>

                <h2 class="text-2xl font-bold mb-4">"Historial"</h2>
                <div class="overflow-x-auto">
                    <table class="table table-zebra w-full bg-base-100">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Cliente"</th>
                                <th>"Asunto"</th>
                                <th>"Estado"</th>
                                <th>"Fecha"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=historial
                                key=|c| c.id
                                children={
                                    let cerrar = cerrar.clone();
                                    move |consulta| {
                                        let id = consulta.id;
                                        let puede_cerrar = consulta.estado.puede_cerrar();
                                        let abrir = consulta.clone();
                                        let cerrar = cerrar.clone();
                                        view! {
                                            <tr>
                                                <td>{consulta.id}</td>
                                                <td>
                                                    {consulta
                                                        .cliente_nombre
                                                        .clone()
                                                        .unwrap_or_else(|| "-".into())}
                                                </td>
                                                <td>{consulta.asunto.clone()}</td>
                                                <td>
                                                    <span class=clase_estado(consulta.estado)>
                                                        {consulta.estado.as_str()}
                                                    </span>
                                                </td>
                                                <td>{fecha::fecha_hora(consulta.fecha_creacion.as_deref())}</td>
                                                <td>
                                                    <div class="flex gap-2">
                                                        <button
                                                            class="btn btn-ghost btn-sm"
                                                            on:click=move |_| {
                                                                seleccionada.set(Some(abrir.clone()))
                                                            }
                                                        >
                                                            "Ver"
                                                        </button>
                                                        <Show when=move || puede_cerrar>
                                                            {
                                                                let cerrar = cerrar.clone();
                                                                view! {
                                                                    <button
                                                                        class="btn btn-outline btn-sm"
                                                                        on:click=move |_| cerrar(id)
                                                                    >
                                                                        "Cerrar"
                                                                    </button>
                                                                }
                                                            }
                                                        </Show>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <Show when=move || historial().is_empty()>
                    <div role="alert" class="alert alert-info mt-4">
                        <span>"Aún no has atendido consultas."</span>
                    </div>
                </Show>
            </Show>

            <ResponderDialog seleccionada=seleccionada on_responder=responder />
        </Layout>
    }
}
