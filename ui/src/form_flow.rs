//! Glue between a form controller held in a signal and the async runtime.
//!
//! The controller is never borrowed across an await: the request is taken out
//! of it, sent, and the result handed back.

use dioxus::prelude::*;
use ledger_editor::host::{Navigator, Notifier};
use ledger_editor::{FormMode, ResourceForm, ResourceFormController};
use serde_json::Value;

pub type FormSignal<F, N, U> = Signal<ResourceFormController<F, N, U>>;

pub async fn load<F, N, U>(mut controller: FormSignal<F, N, U>)
where
    F: ResourceForm + 'static,
    N: Navigator + 'static,
    U: Notifier + 'static,
{
    let request = controller.peek().load_request();
    if let Some(request) = request {
        let result = request.send().await;
        controller.write().apply_loaded(result);
    }
}

/// Starts a submit. After an update succeeds the page stays on the same
/// route, so the controller is rebuilt with `rebuild` and reloaded.
pub fn submit<F, N, U>(
    mut controller: FormSignal<F, N, U>,
    rebuild: impl Fn() -> ResourceFormController<F, N, U> + 'static,
) where
    F: ResourceForm + 'static,
    N: Navigator + 'static,
    U: Notifier + 'static,
{
    let request = controller.write().begin_submit();
    let Some(request) = request else {
        return;
    };

    spawn(async move {
        let mode = request.mode();
        let result = request.send().await;
        let saved = result.is_ok();
        controller.write().complete_submit(result);

        if saved && mode == FormMode::Edition {
            controller.set(rebuild());
            load(controller).await;
        }
    });
}

pub fn set_field<F, N, U>(mut controller: FormSignal<F, N, U>, name: &str, value: Value)
where
    F: ResourceForm + 'static,
    N: Navigator + 'static,
    U: Notifier + 'static,
{
    controller.write().form_mut().set_value(name, value);
}

pub fn touch_field<F, N, U>(mut controller: FormSignal<F, N, U>, name: &str)
where
    F: ResourceForm + 'static,
    N: Navigator + 'static,
    U: Notifier + 'static,
{
    controller.write().form_mut().mark_touched(name);
}
