//! New-consultation dialog (client dashboard).
//!
//! Validation runs locally; an invalid form never produces a request. The
//! purchase selector only offers purchases with remaining quota, and the
//! trigger button is disabled while the quota is zero.

use abogadolinea_shared::protocol::ConsultaNueva;
use abogadolinea_shared::validacion::validar_nueva_consulta;
use abogadolinea_shared::Compra;
use leptos::prelude::*;

#[component]
pub fn NuevaConsultaDialog(
    /// The client's purchases; only those with quota left are offered.
    compras: Signal<Vec<Compra>>,
    /// Whether the client may open a new consultation at all.
    habilitado: Signal<bool>,
    on_crear: Callback<ConsultaNueva>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // 表单字段
    let (compra_sel, set_compra_sel) = signal(String::new());
    let (asunto, set_asunto) = signal(String::new());
    let (mensaje, set_mensaje) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let reset_form = move || {
        set_compra_sel.set(String::new());
        set_asunto.set(String::new());
        set_mensaje.set(String::new());
        set_error.set(None);
    };

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let con_quota = move || {
        compras
            .get()
            .into_iter()
            .filter(|c| c.consultas_disponibles > 0)
            .collect::<Vec<_>>()
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let compra_id = compra_sel.get().parse::<u64>().ok();
        match validar_nueva_consulta(compra_id, &asunto.get(), &mensaje.get()) {
            Ok(datos) => {
                on_crear.run(datos);
                set_open.set(false);
                reset_form();
            }
            Err(mensaje) => set_error.set(Some(mensaje)),
        }
    };

    view! {
        <button
            class="btn btn-primary"
            disabled=move || !habilitado.get()
            on:click=move |_| {
                reset_form();
                set_open.set(true);
            }
        >
            "Nueva Consulta"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">"Nueva Consulta Legal"</h3>

                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2 mt-2">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <div class="form-control">
                        <label class="label" for="compra_id">
                            <span class="label-text">"Compra asociada"</span>
                        </label>
                        <select
                            id="compra_id"
                            class="select select-bordered"
                            on:change=move |ev| set_compra_sel.set(event_target_value(&ev))
                            prop:value=compra_sel
                        >
                            <option value="">"Selecciona una compra"</option>
                            <For
                                each=con_quota
                                key=|c| c.id
                                children=move |compra| {
                                    let etiqueta = format!(
                                        "Plan: {} - {} consultas disponibles",
                                        compra.plan_nombre.clone().unwrap_or_else(|| "N/A".into()),
                                        compra.consultas_disponibles,
                                    );
                                    view! {
                                        <option value=compra.id.to_string()>{etiqueta}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="asunto">
                            <span class="label-text">"Asunto"</span>
                        </label>
                        <input
                            id="asunto"
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| set_asunto.set(event_target_value(&ev))
                            prop:value=asunto
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="mensaje_inicial">
                            <span class="label-text">"Mensaje"</span>
                        </label>
                        <textarea
                            id="mensaje_inicial"
                            class="textarea textarea-bordered"
                            rows="6"
                            placeholder="Describe tu consulta legal de manera detallada"
                            on:input=move |ev| set_mensaje.set(event_target_value(&ev))
                            prop:value=mensaje
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            on:click=move |_| set_open.set(false)
                        >
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn-primary">"Enviar Consulta"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
