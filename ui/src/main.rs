mod api;
mod components;
mod form_flow;
mod host;
mod utils;
mod views;

use dioxus::prelude::*;

use components::Shell;
use host::Toast;
use views::{CategoryEdit, CategoryList, CategoryNew, EntryEdit, EntryList, EntryNew, PageNotFound};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/entries")]
        EntryList {},
        #[route("/entries/new")]
        EntryNew {},
        #[route("/entries/:id/edit")]
        EntryEdit { id: String },
        #[route("/categories")]
        CategoryList {},
        #[route("/categories/new")]
        CategoryNew {},
        #[route("/categories/:id/edit")]
        CategoryEdit { id: String },
    #[end_layout]
    #[redirect("/", || Route::EntryList {})]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[allow(non_snake_case)]
fn App() -> Element {
    let toasts = use_signal(Vec::<Toast>::new);
    use_context_provider(|| toasts);

    rsx! {
        Router::<Route> {}
    }
}
