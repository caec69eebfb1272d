//! Admin dashboard: platform statistics plus user, lawyer and purchase tables.

use abogadolinea_shared::protocol::{Estadisticas, ResumenAbogado};
use abogadolinea_shared::{fecha, Compra, EstadoCompra, Rol, Usuario};
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pestana {
    Usuarios,
    Abogados,
    Compras,
}

fn clase_rol(rol: Rol) -> &'static str {
    match rol {
        Rol::Admin => "badge badge-error",
        Rol::Abogado => "badge badge-info",
        Rol::Cliente => "badge badge-ghost",
    }
}

fn clase_estado_compra(estado: EstadoCompra) -> &'static str {
    match estado {
        EstadoCompra::Pagada => "badge badge-success",
        EstadoCompra::Pendiente => "badge badge-warning",
        EstadoCompra::Rechazada | EstadoCompra::Otra => "badge badge-error",
    }
}

#[component]
pub fn PanelAdminPage() -> impl IntoView {
    view! {
        <ProtectedRoute roles=&[Rol::Admin]>
            <PanelAdmin />
        </ProtectedRoute>
    }
}

#[component]
fn PanelAdmin() -> impl IntoView {
    let api = use_api();

    let (estadisticas, set_estadisticas) = signal(Estadisticas::default());
    let (usuarios, set_usuarios) = signal(Vec::<Usuario>::new());
    let (abogados, set_abogados) = signal(Vec::<ResumenAbogado>::new());
    let (compras, set_compras) = signal(Vec::<Compra>::new());
    let (cargando, set_cargando) = signal(true);
    let (error_carga, set_error_carga) = signal(Option::<String>::None);
    let (pestana, set_pestana) = signal(Pestana::Usuarios);

    // 初始加载
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            set_cargando.set(true);
            spawn_local(async move {
                let (res_stats, res_usuarios, res_abogados, res_compras) = futures::join!(
                    api.admin_estadisticas(),
                    api.admin_usuarios(1, 10, None),
                    api.admin_abogados(),
                    api.admin_compras(1, 10, None),
                );
                let mut fallo = false;
                match res_stats {
                    Ok(datos) => set_estadisticas.set(datos),
                    Err(e) => {
                        error!("[PanelAdmin] stats: {e}");
                        fallo = true;
                    }
                }
                match res_usuarios {
                    Ok(lista) => set_usuarios.set(lista),
                    Err(e) => {
                        error!("[PanelAdmin] usuarios: {e}");
                        fallo = true;
                    }
                }
                match res_abogados {
                    Ok(lista) => set_abogados.set(lista),
                    Err(e) => {
                        error!("[PanelAdmin] abogados: {e}");
                        fallo = true;
                    }
                }
                match res_compras {
                    Ok(lista) => set_compras.set(lista),
                    Err(e) => {
                        error!("[PanelAdmin] compras: {e}");
                        fallo = true;
                    }
                }
                if fallo {
                    set_error_carga.set(Some(
                        "Error al cargar los datos de administración".to_string(),
                    ));
                }
                set_cargando.set(false);
            });
        });
    }

    let clase_pestana = move |cual: Pestana| {
        if pestana.get() == cual {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <Layout>
            <h1 class="text-3xl font-bold mb-6">"Panel de Administración"</h1>

            <Show when=move || error_carga.get().is_some()>
                <div role="alert" class="alert alert-error mb-4">
                    <span>{move || error_carga.get().unwrap_or_default()}</span>
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
                        <div class="stat-title">"Usuarios"</div>
                        <div class="stat-value text-primary">
                            {move || estadisticas.get().usuarios.valor()}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Planes Activos"</div>
                        <div class="stat-value text-secondary">
                            {move || estadisticas.get().planes_activos}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Compras"</div>
                        <div class="stat-value">
                            {move || estadisticas.get().compras.valor()}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Ingresos Totales"</div>
                        <div class="stat-value text-success">
                            {move || format!("${:.2}", estadisticas.get().ingresos_totales)}
                        </div>
                    </div>
                </div>

                <div role="tablist" class="tabs tabs-boxed mb-4 w-fit">
                    <button
                        role="tab"
                        class=move || clase_pestana(Pestana::Usuarios)
                        on:click=move |_| set_pestana.set(Pestana::Usuarios)
                    >
                        "Usuarios"
                    </button>
                    <button
                        role="tab"
                        class=move || clase_pestana(Pestana::Abogados)
                        on:click=move |_| set_pestana.set(Pestana::Abogados)
                    >
                        "Abogados"
                    </button>
                    <button
                        role="tab"
                        class=move || clase_pestana(Pestana::Compras)
                        on:click=move |_| set_pestana.set(Pestana::Compras)
                    >
                        "Compras"
                    </button>
                </div>

                <Show when=move || pestana.get() == Pestana::Usuarios>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full bg-base-100">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Nombre"</th>
                                    <th>"Email"</th>
                                    <th>"Rol"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || usuarios.get()
                                    key=|u| u.id
                                    children=|usuario: Usuario| view! {
                                        <tr>
                                            <td>{usuario.id}</td>
                                            <td>{usuario.nombre.clone()}</td>
                                            <td>{usuario.email.clone()}</td>
                                            <td>
                                                <span class=clase_rol(usuario.rol)>
                                                    {usuario.rol.as_str()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                    <Show when=move || usuarios.get().is_empty()>
                        <div role="alert" class="alert alert-info mt-4">
                            <span>"No hay usuarios registrados."</span>
                        </div>
                    </Show>
                </Show>

                <Show when=move || pestana.get() == Pestana::Abogados>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full bg-base-100">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Nombre"</th>
                                    <th>"Email"</th>
                                    <th>"Consultas"</th>
                                    <th>"Respondidas"</th>
                                    <th>"Cerradas"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || abogados.get()
                                    key=|a| a.id
                                    children=|abogado: ResumenAbogado| view! {
                                        <tr>
                                            <td>{abogado.id}</td>
                                            <td>{abogado.nombre.clone()}</td>
                                            <td>{abogado.email.clone()}</td>
                                            <td>{abogado.total_consultas}</td>
                                            <td>{abogado.consultas_respondidas}</td>
                                            <td>{abogado.consultas_cerradas}</td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                    <Show when=move || abogados.get().is_empty()>
                        <div role="alert" class="alert alert-info mt-4">
                            <span>"No hay abogados registrados."</span>
                        </div>
                    </Show>
                </Show>

                <Show when=move || pestana.get() == Pestana::Compras>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full bg-base-100">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Plan"</th>
                                    <th>"Monto"</th>
                                    <th>"Estado"</th>
                                    <th>"Fecha"</th>
                                    <th>"Consultas"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || compras.get()
                                    key=|c| c.id
                                    children=|compra: Compra| view! {
                                        <tr>
                                            <td>{compra.id}</td>
                                            <td>
                                                {compra
                                                    .plan_nombre
                                                    .clone()
                                                    .unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td>{format!("${:.2}", compra.monto)}</td>
                                            <td>
                                                <span class=clase_estado_compra(compra.estado)>
                                                    {compra.estado.as_str()}
                                                </span>
                                            </td>
                                            <td>{fecha::fecha_corta(compra.fecha_compra.as_deref())}</td>
                                            <td>
                                                {format!(
                                                    "{}/{}",
                                                    compra
                                                        .consultas_usadas
                                                        .unwrap_or_else(|| {
                                                            compra
                                                                .consultas_totales
                                                                .saturating_sub(compra.consultas_disponibles)
                                                        }),
                                                    compra.consultas_totales,
                                                )}
                                            </td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                    <Show when=move || compras.get().is_empty()>
                        <div role="alert" class="alert alert-info mt-4">
                            <span>"No hay compras registradas."</span>
                        </div>
                    </Show>
                </Show>
            </Show>
        </Layout>
    }
}
