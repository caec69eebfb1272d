//! Consultation detail / response dialog (lawyer dashboard).
//!
//! Opens when a consultation is selected. For closed consultations the
//! response field is read-only and no submit is offered; the server rejects
//! that transition anyway.

use abogadolinea_shared::validacion::validar_respuesta;
use abogadolinea_shared::{fecha, Consulta};
use leptos::prelude::*;

#[component]
pub fn ResponderDialog(
    /// Currently selected consultation; `None` keeps the dialog closed.
    seleccionada: RwSignal<Option<Consulta>>,
    on_responder: Callback<(u64, String)>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (respuesta, set_respuesta) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    // Open/close the native <dialog> and reseed the response text whenever
    // the selection changes.
    Effect::new(move |_| {
        let seleccion = seleccionada.get();
        if let Some(consulta) = &seleccion {
            set_respuesta.set(consulta.respuesta.clone().unwrap_or_default());
            set_error.set(None);
        }
        if let Some(dialog) = dialog_ref.get() {
            match seleccion {
                Some(_) if !dialog.open() => {
                    let _ = dialog.show_modal();
                }
                None if dialog.open() => dialog.close(),
                _ => {}
            }
        }
    });

    let cerrar_dialogo = move |_| seleccionada.set(None);

    let on_enviar = move |_| {
        let Some(consulta) = seleccionada.get() else {
            return;
        };
        match validar_respuesta(&respuesta.get()) {
            Ok(texto) => {
                set_error.set(None);
                on_responder.run((consulta.id, texto));
            }
            Err(mensaje) => set_error.set(Some(mensaje)),
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| seleccionada.set(None)>
            <div class="modal-box max-w-2xl">
                {move || {
                    seleccionada
                        .get()
                        .map(|consulta| {
                            let cerrada = consulta.estado.es_terminal();
                            view! {
                                <h3 class="font-bold text-lg">
                                    {format!("Consulta #{} - {}", consulta.id, consulta.asunto)}
                                </h3>
                                <p class="text-sm opacity-70 mt-1">
                                    "Cliente: "
                                    {consulta.cliente_nombre.clone().unwrap_or_else(|| "-".into())}
                                    " · Fecha: "
                                    {fecha::fecha_hora(consulta.fecha_creacion.as_deref())}
                                </p>

                                <Show when=move || error.get().is_some()>
                                    <div role="alert" class="alert alert-error text-sm py-2 mt-2">
                                        <span>{move || error.get().unwrap_or_default()}</span>
                                    </div>
                                </Show>

                                <div class="form-control mt-4">
                                    <label class="label">
                                        <span class="label-text">"Mensaje del cliente"</span>
                                    </label>
                                    <textarea
                                        class="textarea textarea-bordered"
                                        rows="4"
                                        readonly
                                        prop:value=consulta.mensaje_inicial.clone()
                                    ></textarea>
                                </div>

                                <div class="form-control mt-2">
                                    <label class="label" for="respuesta">
                                        <span class="label-text">"Tu respuesta"</span>
                                    </label>
                                    <textarea
                                        id="respuesta"
                                        class="textarea textarea-bordered"
                                        rows="6"
                                        disabled=cerrada
                                        on:input=move |ev| set_respuesta.set(event_target_value(&ev))
                                        prop:value=respuesta
                                    ></textarea>
                                    <span class="label-text-alt mt-1 opacity-70">
                                        {if cerrada {
                                            "Esta consulta está cerrada"
                                        } else {
                                            "Escribe tu respuesta legal detallada"
                                        }}
                                    </span>
                                </div>

                                <div class="modal-action">
                                    <button class="btn btn-ghost" on:click=cerrar_dialogo>
                                        "Cerrar"
                                    </button>
                                    <Show when=move || !cerrada>
                                        <button class="btn btn-primary" on:click=on_enviar>
                                            "Enviar Respuesta"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </div>
        </dialog>
    }
}
