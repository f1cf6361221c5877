use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "empty-state",
            p { "PÁGINA NÃO ENCONTRADA: /{path}" }
            Link { to: Route::EntryList {}, "VOLTAR AOS LANÇAMENTOS" }
        }
    }
}
