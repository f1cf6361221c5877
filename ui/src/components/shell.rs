use dioxus::prelude::*;

use crate::host::{Toast, ToastKind};
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum Section {
    Entries,
    Categories,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Entries => "LANÇAMENTOS",
            Section::Categories => "CATEGORIAS",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Section::Entries => Route::EntryList {},
            Section::Categories => Route::CategoryList {},
        }
    }

    pub fn all() -> &'static [Section] {
        &[Section::Entries, Section::Categories]
    }

    fn of(route: &Route) -> Option<Section> {
        match route {
            Route::EntryList {} | Route::EntryNew {} | Route::EntryEdit { .. } => {
                Some(Section::Entries)
            }
            Route::CategoryList {} | Route::CategoryNew {} | Route::CategoryEdit { .. } => {
                Some(Section::Categories)
            }
            Route::PageNotFound { .. } => None,
        }
    }
}

#[component]
pub fn TopStrip() -> Element {
    let route = use_route::<Route>();
    let current = Section::of(&route);
    let nav = navigator();

    rsx! {
        div { class: "top-strip",
            div { class: "app-name", "FINANÇAS" }
            div { class: "section-switcher",
                for section in Section::all() {
                    button {
                        class: if Some(*section) == current { "active" } else { "" },
                        onclick: move |_| {
                            nav.push(section.route());
                        },
                        "{section.label()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Toasts() -> Element {
    let mut toasts = use_context::<Signal<Vec<Toast>>>();

    rsx! {
        div { class: "toasts",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    onclick: move |_| toasts.write().retain(|t| t.id != toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

#[component]
pub fn Shell() -> Element {
    rsx! {
        div { id: "main",
            TopStrip {}
            Toasts {}
            div { class: "content container",
                Outlet::<Route> {}
            }
        }
    }
}
