use dioxus::prelude::*;
use ledger_editor::categories::CategoryForm;
use ledger_editor::models::Category;
use ledger_editor::{ResourceFormController, ResourceListController, RouteSnapshot};
use serde_json::json;

use crate::api;
use crate::components::{ServerErrorMessages, TextField};
use crate::form_flow;
use crate::host::{PageNotifier, RouterNavigator, Toast};
use crate::utils::optional_text;
use crate::Route;

type CategoryController = ResourceFormController<CategoryForm, RouterNavigator, PageNotifier>;

fn category_controller(
    route: &Route,
    nav: Navigator,
    toasts: Signal<Vec<Toast>>,
) -> CategoryController {
    ResourceFormController::new(
        CategoryForm,
        api::categories(),
        RouteSnapshot::parse(&route.to_string()),
        RouterNavigator::new(nav),
        PageNotifier::new(toasts),
    )
}

#[component]
pub fn CategoryList() -> Element {
    let toasts = use_context::<Signal<Vec<Toast>>>();
    let mut list = use_signal(ResourceListController::<Category>::new);
    let nav = navigator();

    use_future(move || async move {
        let mut notifier = PageNotifier::new(toasts);
        let result = api::categories().list().await;
        list.write().apply_loaded(result, &mut notifier);
    });

    let handle_delete = move |id: i64| {
        let mut notifier = PageNotifier::new(toasts);
        if !ResourceListController::<Category>::confirm_delete(&mut notifier) {
            return;
        }
        spawn(async move {
            let result = api::categories().delete(id).await;
            list.write().apply_deleted(id, result, &mut notifier);
        });
    };

    let categories = list.read().resources().to_vec();
    let loaded = list.read().is_loaded();

    rsx! {
        div { class: "content-header",
            h1 { "CATEGORIAS" }
            button {
                class: "primary",
                onclick: move |_| {
                    nav.push(Route::CategoryNew {});
                },
                "+ NOVA CATEGORIA"
            }
        }

        if !loaded {
            div { class: "loading", "CARREGANDO..." }
        } else if categories.is_empty() {
            div { class: "empty-state", "NENHUMA CATEGORIA" }
        } else {
            table { class: "table",
                thead {
                    tr {
                        th { "Categoria" }
                        th { class: "text-center", "Ações" }
                    }
                }
                tbody {
                    for category in categories {
                        {
                            let id = category.id.unwrap_or_default();
                            let description = category.description.clone().unwrap_or_default();
                            rsx! {
                                tr { key: "{id}",
                                    td {
                                        strong { "{category.name}" }
                                        br {}
                                        small { "{description}" }
                                    }
                                    td { class: "text-center",
                                        button {
                                            onclick: move |_| {
                                                nav.push(Route::CategoryEdit { id: id.to_string() });
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
pub fn CategoryNew() -> Element {
    rsx! {
        CategoryFormPage {}
    }
}

#[component]
pub fn CategoryEdit(id: String) -> Element {
    rsx! {
        CategoryFormPage { key: "{id}" }
    }
}

#[component]
fn CategoryFormPage() -> Element {
    let route = use_route::<Route>();
    let toasts = use_context::<Signal<Vec<Toast>>>();
    let nav = navigator();
    let build = move || category_controller(&route, nav, toasts);
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
                    nav.push(Route::CategoryList {});
                },
                "<< VOLTAR"
            }
        }

        form { onsubmit: on_submit,
            if let Some(control) = form.get("name").cloned() {
                TextField {
                    label: "NOME".to_string(),
                    control: control,
                    on_input: move |v: String| form_flow::set_field(controller, "name", json!(v)),
                    on_blur: move |_| form_flow::touch_field(controller, "name"),
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
