use tracing::warn;

use crate::constants::{MSG_DELETE_CONFIRM, MSG_DELETE_ERROR, MSG_LIST_LOAD_ERROR};
use crate::host::Notifier;
use crate::resource::Resource;
use crate::service::{ResourceService, ServiceError};

/// State of a resource list page: the loaded records, newest first.
#[derive(Debug, Clone)]
pub struct ResourceListController<T: Resource> {
    resources: Vec<T>,
    loaded: bool,
}

impl<T: Resource> Default for ResourceListController<T> {
    fn default() -> Self {
        Self {
            resources: Vec::new(),
            loaded: false,
        }
    }
}

impl<T: Resource> ResourceListController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> &[T] {
        &self.resources
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Stores a fetched collection ordered by id, highest first, or alerts.
    pub fn apply_loaded(
        &mut self,
        result: Result<Vec<T>, ServiceError>,
        notifier: &mut impl Notifier,
    ) {
        match result {
            Ok(mut resources) => {
                resources.sort_by(|a, b| b.id().cmp(&a.id()));
                self.resources = resources;
                self.loaded = true;
            }
            Err(e) => {
                warn!(error = %e, "failed to load list");
                notifier.alert(MSG_LIST_LOAD_ERROR);
            }
        }
    }

    pub async fn load(&mut self, service: &ResourceService<T>, notifier: &mut impl Notifier) {
        let result = service.list().await;
        self.apply_loaded(result, notifier);
    }

    /// Asks for confirmation before a delete. `false` means leave the list alone.
    pub fn confirm_delete(notifier: &mut impl Notifier) -> bool {
        notifier.confirm(MSG_DELETE_CONFIRM)
    }

    /// Drops the record locally once the server accepted the delete, or alerts.
    pub fn apply_deleted(
        &mut self,
        id: i64,
        result: Result<(), ServiceError>,
        notifier: &mut impl Notifier,
    ) {
        match result {
            Ok(()) => self.resources.retain(|r| r.id() != Some(id)),
            Err(e) => {
                warn!(id, error = %e, "failed to delete resource");
                notifier.alert(MSG_DELETE_ERROR);
            }
        }
    }

    /// Confirms, deletes and updates the list. Returns whether a delete was attempted.
    pub async fn delete(
        &mut self,
        service: &ResourceService<T>,
        id: i64,
        notifier: &mut impl Notifier,
    ) -> bool {
        if !Self::confirm_delete(notifier) {
            return false;
        }
        let result = service.delete(id).await;
        self.apply_deleted(id, result, notifier);
        true
    }
}
