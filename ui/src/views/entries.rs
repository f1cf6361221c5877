use dioxus::prelude::*;
use ledger_editor::entries::EntryForm;
use ledger_editor::models::{Category, Entry, EntryType};
use ledger_editor::{FormMode, ResourceFormController, ResourceListController, RouteSnapshot};
use serde_json::{json, Value};
use tracing::warn;

use crate::api;
use crate::components::{FormFieldError, ServerErrorMessages, TextField};
use crate::form_flow;
use crate::host::{PageNotifier, RouterNavigator, Toast};
use crate::utils::{format_currency, optional_text, today};
use crate::Route;

type EntryController = ResourceFormController<EntryForm, RouterNavigator, PageNotifier>;

fn entry_controller(route: &Route, nav: Navigator, toasts: Signal<Vec<Toast>>) -> EntryController {
    let mut controller = ResourceFormController::new(
        EntryForm,
        api::entries(),
        RouteSnapshot::parse(&route.to_string()),
        RouterNavigator::new(nav),
        PageNotifier::new(toasts),
    );
    if controller.mode() == FormMode::Creation {
        controller.form_mut().set_value("date", json!(today()));
    }
    controller
}

fn use_categories() -> Signal<Vec<Category>> {
    let mut categories = use_signal(Vec::<Category>::new);
    use_future(move || async move {
        match api::categories().list().await {
            Ok(list) => categories.set(list),
            Err(e) => warn!(error = %e, "failed to load categories"),
        }
    });
    categories
}

#[component]
pub fn EntryList() -> Element {
    let toasts = use_context::<Signal<Vec<Toast>>>();
    let mut list = use_signal(ResourceListController::<Entry>::new);
    let categories = use_categories();
    let nav = navigator();

    use_future(move || async move {
        let mut notifier = PageNotifier::new(toasts);
        let result = api::entries().list().await;
        list.write().apply_loaded(result, &mut notifier);
    });

    let handle_delete = move |id: i64| {
        let mut notifier = PageNotifier::new(toasts);
        if !ResourceListController::<Entry>::confirm_delete(&mut notifier) {
            return;
        }
        spawn(async move {
            let result = api::entries().delete(id).await;
            list.write().apply_deleted(id, result, &mut notifier);
        });
    };

    let entries = list.read().resources().to_vec();
    let loaded = list.read().is_loaded();

    rsx! {
        div { class: "content-header",
            h1 { "LANÇAMENTOS" }
            button {
                class: "primary",
                onclick: move |_| {
                    nav.push(Route::EntryNew {});
                },
                "+ NOVO LANÇAMENTO"
            }
        }

        if !loaded {
            div { class: "loading", "CARREGANDO..." }
        } else if entries.is_empty() {
            div { class: "empty-state", "NENHUM LANÇAMENTO" }
        } else {
            table { class: "table",
                thead {
                    tr {
                        th { "Lançamento" }
                        th { "Categoria" }
                        th { class: "text-right", "Valor R$" }
                        th { class: "text-center", "Ações" }
                    }
                }
                tbody {
                    for entry in entries {
                        {
                            let id = entry.id.unwrap_or_default();
                            let category_name = categories
                                .read()
                                .iter()
                                .find(|c| c.id == entry.category_id)
                                .map(|c| c.name.clone())
                                .unwrap_or_default();
                            let amount_class = match entry.kind {
                                EntryType::Expense => "text-right expense",
                                EntryType::Revenue => "text-right revenue",
                            };
                            let amount = format_currency(&entry.amount);
                            rsx! {
                                tr { key: "{id}",
                                    td {
                                        strong { "{entry.name}" }
                                        br {}
                                        small { "{entry.date} | {entry.paid_text()}" }
                                    }
                                    td { "{category_name}" }
                                    td { class: amount_class, "{amount}" }
                                    td { class: "text-center",
                                        button {
                                            onclick: move |_| {
                                                nav.push(Route::EntryEdit { id: id.to_string() });
                                            },
                                            "EDITAR"
                                        }
                                        button {
                                            class: "danger",
                                            onclick: move |_| handle_delete(id),
                                            "EXCLUIR"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EntryNew() -> Element {
    rsx! {
        EntryFormPage {}
    }
}

#[component]
pub fn EntryEdit(id: String) -> Element {
    rsx! {
        EntryFormPage { key: "{id}" }
    }
}

#[component]
fn EntryFormPage() -> Element {
    let route = use_route::<Route>();
    let toasts = use_context::<Signal<Vec<Toast>>>();
    let categories = use_categories();
    let nav = navigator();
    let build = move || entry_controller(&route, nav, toasts);
    let controller = use_signal(build.clone());

    use_future(move || form_flow::load(controller));

    let on_submit = move |e: Event<FormData>| {
        e.prevent_default();
        form_flow::submit(controller, build.clone());
    };

    let title = controller.read().page_title().to_string();
    let form = controller.read().form().clone();
    let can_submit = controller.read().can_submit();
    let server_errors = controller
        .read()
        .server_error_messages()
        .map(<[String]>::to_vec)
        .unwrap_or_default();

    rsx! {
        div { class: "content-header",
            h1 { "{title}" }
            button {
                onclick: move |_| {
                    nav.push(Route::EntryList {});
                },
                "<< VOLTAR"
            }
        }

        form { onsubmit: on_submit,
            if let Some(control) = form.get("type").cloned() {
                div { class: "form-group",
                    label { r#for: "type", "TIPO" }
                    select {
                        id: "type",
                        class: "form-control",
                        value: "{control.text()}",
                        onchange: move |e| form_flow::set_field(controller, "type", json!(e.value())),
                        for kind in EntryType::all() {
                            option { value: "{kind.as_str()}", "{kind.label()}" }
                        }
                    }
                    FormFieldError { control: control.clone() }
                }
            }

            if let Some(control) = form.get("name").cloned() {
                TextField {
                    label: "LANÇAMENTO".to_string(),
                    control: control,
                    on_input: move |v: String| form_flow::set_field(controller, "name", json!(v)),
                    on_blur: move |_| form_flow::touch_field(controller, "name"),
                }
            }

            if let Some(control) = form.get("amount").cloned() {
                TextField {
                    label: "VALOR".to_string(),
                    control: control,
                    placeholder: "0,00".to_string(),
                    on_input: move |v: String| form_flow::set_field(controller, "amount", json!(v)),
                    on_blur: move |_| form_flow::touch_field(controller, "amount"),
                }
            }

            if let Some(control) = form.get("date").cloned() {
                TextField {
                    label: "DATA".to_string(),
                    control: control,
                    placeholder: "dd/mm/aaaa".to_string(),
                    on_input: move |v: String| form_flow::set_field(controller, "date", json!(v)),
                    on_blur: move |_| form_flow::touch_field(controller, "date"),
                }
            }

            if let Some(control) = form.get("paid").cloned() {
                div { class: "form-group",
                    label { r#for: "paid", "PAGO" }
                    select {
                        id: "paid",
                        class: "form-control",
                        value: "{control.text()}",
                        onchange: move |e| {
                            form_flow::set_field(controller, "paid", json!(e.value() == "true"))
                        },
                        option { value: "true", "Pago" }
                        option { value: "false", "Pendente" }
                    }
                    FormFieldError { control: control.clone() }
                }
            }

            if let Some(control) = form.get("categoryId").cloned() {
                div { class: "form-group",
                    label { r#for: "categoryId", "CATEGORIA" }
                    select {
                        id: "categoryId",
                        class: "form-control",
                        value: "{control.text()}",
                        onchange: move |e| {
                            let value = match e.value() {
                                v if v.is_empty() => Value::Null,
                                v => json!(v),
                            };
                            form_flow::set_field(controller, "categoryId", value);
                        },
                        onblur: move |_| form_flow::touch_field(controller, "categoryId"),
                        option { value: "", "Selecione" }
                        for category in categories() {
                            option {
                                value: "{category.id.unwrap_or_default()}",
                                "{category.name}"
                            }
                        }
                    }
                    FormFieldError { control: control.clone() }
                }
            }

            if let Some(control) = form.get("description").cloned() {
                TextField {
                    label: "DESCRIÇÃO".to_string(),
                    control: control,
                    on_input: move |v: String| {
                        form_flow::set_field(controller, "description", optional_text(v))
                    },
                    on_blur: move |_| form_flow::touch_field(controller, "description"),
                }
            }

            ServerErrorMessages { messages: server_errors }

            button {
                class: "primary",
                r#type: "submit",
                disabled: !can_submit,
                "SALVAR"
            }
        }
    }
}
