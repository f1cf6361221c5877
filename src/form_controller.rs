use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::*;
use crate::field_error;
use crate::form::FormGroup;
use crate::host::{Navigator, Notifier};
use crate::resource::Resource;
use crate::route::{FormMode, RouteSnapshot, edit_path, list_path};
use crate::service::{ResourceService, ServiceError};

#[derive(Debug, Error)]
pub enum FormError {
    #[error("form value does not describe a record: {0}")]
    Conversion(#[from] serde_json::Error),
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

/// What a concrete resource contributes to its create/edit page.
pub trait ResourceForm {
    type Record: Resource;

    /// Empty form structure: fields, initial values and validators.
    fn build_form(&self) -> FormGroup;

    /// Turns the form value into a record.
    fn to_record(&self, value: Value) -> Result<Self::Record, FormError> {
        Ok(serde_json::from_value(value)?)
    }

    fn creation_page_title(&self) -> String {
        DEFAULT_CREATION_TITLE.to_string()
    }

    /// `record` is `None` until the edited record has loaded.
    fn edition_page_title(&self, _record: Option<&Self::Record>) -> String {
        DEFAULT_EDITION_TITLE.to_string()
    }
}

/// Fetch of the record an edition page edits.
pub struct LoadRequest<T: Resource> {
    id: Option<i64>,
    service: ResourceService<T>,
}

impl<T: Resource> LoadRequest<T> {
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// An id that is not a positive integer never reaches the server.
    pub async fn send(self) -> Result<T, ServiceError> {
        match self.id {
            Some(id) => self.service.get_by_id(id).await,
            None => Err(ServiceError::NotFound),
        }
    }
}

/// A create or update call prepared by [`ResourceFormController::begin_submit`].
pub struct SubmitRequest<T: Resource> {
    mode: FormMode,
    record: T,
    service: ResourceService<T>,
}

impl<T: Resource> SubmitRequest<T> {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub async fn send(self) -> Result<T, ServiceError> {
        match self.mode {
            FormMode::Creation => self.service.create(&self.record).await,
            FormMode::Edition => self.service.update(&self.record).await,
        }
    }
}

/// Create/edit lifecycle of one resource form page.
///
/// The mode is fixed at construction from the route and never re-evaluated.
/// At most one create/update is outstanding at a time: `begin_submit` refuses
/// while a previous submit has not completed.
pub struct ResourceFormController<F, N, U>
where
    F: ResourceForm,
    N: Navigator,
    U: Notifier,
{
    definition: F,
    service: ResourceService<F::Record>,
    route: RouteSnapshot,
    navigator: N,
    notifier: U,
    mode: FormMode,
    form: FormGroup,
    resource: Option<F::Record>,
    page_title: String,
    server_error_messages: Option<Vec<String>>,
    submitting: bool,
}

impl<F, N, U> ResourceFormController<F, N, U>
where
    F: ResourceForm,
    N: Navigator,
    U: Notifier,
{
    pub fn new(
        definition: F,
        service: ResourceService<F::Record>,
        route: RouteSnapshot,
        navigator: N,
        notifier: U,
    ) -> Self {
        let mode = route.mode();
        let form = definition.build_form();
        debug!(base_path = route.base_path(), ?mode, "resource form initialized");

        let mut controller = Self {
            definition,
            service,
            route,
            navigator,
            notifier,
            mode,
            form,
            resource: None,
            page_title: String::new(),
            server_error_messages: None,
            submitting: false,
        };
        controller.refresh_page_title();
        controller
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn form(&self) -> &FormGroup {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormGroup {
        &mut self.form
    }

    pub fn resource(&self) -> Option<&F::Record> {
        self.resource.as_ref()
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn server_error_messages(&self) -> Option<&[String]> {
        self.server_error_messages.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// False while an edition page has no loaded record to update.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.form.is_valid() && !self.awaiting_record()
    }

    fn awaiting_record(&self) -> bool {
        self.mode == FormMode::Edition && self.resource.is_none()
    }

    pub fn route(&self) -> &RouteSnapshot {
        &self.route
    }

    pub fn service(&self) -> &ResourceService<F::Record> {
        &self.service
    }

    pub fn definition(&self) -> &F {
        &self.definition
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn notifier(&self) -> &U {
        &self.notifier
    }

    /// Error message for one field, following the presenter's rules.
    pub fn field_error(&self, name: &str) -> Option<String> {
        self.form.get(name).and_then(field_error::error_message)
    }

    /// Recomputes the title. Idempotent; call it on every render.
    pub fn refresh_page_title(&mut self) {
        self.page_title = match self.mode {
            FormMode::Creation => self.definition.creation_page_title(),
            FormMode::Edition => self.definition.edition_page_title(self.resource.as_ref()),
        };
    }

    /// The fetch an edition page needs; `None` in creation mode.
    pub fn load_request(&self) -> Option<LoadRequest<F::Record>> {
        match self.mode {
            FormMode::Creation => None,
            FormMode::Edition => Some(LoadRequest {
                id: self.route.id(),
                service: self.service.clone(),
            }),
        }
    }

    /// Populates the form with a fetched record, or raises the load alert.
    pub fn apply_loaded(&mut self, result: Result<F::Record, ServiceError>) {
        match result {
            Ok(record) => match serde_json::to_value(&record) {
                Ok(value) => {
                    self.form.patch_value(&value);
                    self.resource = Some(record);
                    self.refresh_page_title();
                }
                Err(e) => {
                    warn!(error = %e, "loaded record could not be bound to the form");
                    self.notifier.alert(MSG_LOAD_ERROR);
                }
            },
            Err(e) => {
                warn!(error = %e, route = ?self.route, "failed to load resource");
                self.notifier.alert(MSG_LOAD_ERROR);
            }
        }
    }

    /// Fetches and binds the edited record. Does nothing in creation mode.
    pub async fn load_resource(&mut self) {
        if let Some(request) = self.load_request() {
            let result = request.send().await;
            self.apply_loaded(result);
        }
    }

    /// Guards against duplicate submits and converts the form into a record.
    ///
    /// Returns `None` without side effects while a submit is outstanding or
    /// while an edition page has no loaded record. An invalid form gets every
    /// field marked touched so its errors show.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest<F::Record>> {
        if self.submitting {
            debug!("submit ignored: previous submit still in flight");
            return None;
        }
        if self.awaiting_record() {
            debug!(route = ?self.route, "submit ignored: edited record not loaded");
            return None;
        }
        if self.form.is_invalid() {
            self.form.mark_all_touched();
            return None;
        }

        self.submitting = true;

        let record = match self.definition.to_record(self.form.value()) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "form value could not be converted");
                self.notifier.error(MSG_SUBMIT_ERROR);
                self.submitting = false;
                self.server_error_messages = Some(vec![MSG_INVALID_FORM_VALUE.to_string()]);
                return None;
            }
        };

        // The edited record's id is authoritative over whatever the form holds.
        let record = match (self.mode, self.resource.as_ref().and_then(|r| r.id())) {
            (FormMode::Edition, Some(id)) => record.with_id(id),
            _ => record,
        };

        Some(SubmitRequest {
            mode: self.mode,
            record,
            service: self.service.clone(),
        })
    }

    /// Handles the outcome of a create/update call.
    pub fn complete_submit(&mut self, result: Result<F::Record, ServiceError>) {
        match result {
            Ok(record) => self.actions_for_success(record),
            Err(e) => self.actions_for_error(e),
        }
    }

    pub async fn submit(&mut self) {
        if let Some(request) = self.begin_submit() {
            let result = request.send().await;
            self.complete_submit(result);
        }
    }

    fn actions_for_success(&mut self, record: F::Record) {
        self.notifier.success(MSG_SUBMIT_SUCCESS);

        let base_path = self.route.base_path().to_string();
        let id = record.id();
        self.resource = Some(record);

        // Leaving and re-entering the edit route remounts the page so edition
        // state is rebuilt from the canonical record.
        self.navigator.navigate_by_url(&list_path(&base_path), true);
        match id {
            Some(id) => self
                .navigator
                .navigate_by_url(&edit_path(&base_path, id), false),
            None => warn!(%base_path, "server returned a record without id"),
        }
    }

    fn actions_for_error(&mut self, error: ServiceError) {
        self.notifier.error(MSG_SUBMIT_ERROR);
        self.submitting = false;

        self.server_error_messages = Some(match error {
            ServiceError::Validation(messages) => messages,
            _ => vec![MSG_COMMUNICATION_FAILURE.to_string()],
        });
    }
}
