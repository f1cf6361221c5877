use dioxus::prelude::*;
use ledger_editor::field_error::error_message;
use ledger_editor::form::FormControl;

/// The single message for a field, once the user has touched it.
#[component]
pub fn FormFieldError(control: FormControl) -> Element {
    rsx! {
        if let Some(message) = error_message(&control) {
            p { class: "text-danger", "{message}" }
        }
    }
}

#[component]
pub fn TextField(
    label: String,
    control: FormControl,
    #[props(default)] placeholder: String,
    on_input: EventHandler<String>,
    on_blur: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { r#for: "{control.name()}", "{label}" }
            input {
                id: "{control.name()}",
                r#type: "text",
                class: "form-control",
                placeholder: "{placeholder}",
                value: "{control.text()}",
                oninput: move |e| on_input.call(e.value()),
                onblur: move |_| on_blur.call(()),
            }
            FormFieldError { control: control.clone() }
        }
    }
}

#[component]
pub fn ServerErrorMessages(messages: Vec<String>) -> Element {
    if messages.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "alert alert-danger mt-4",
            strong { "Erro no servidor:" }
            ul {
                for message in messages.iter() {
                    li { "{message}" }
                }
            }
        }
    }
}
