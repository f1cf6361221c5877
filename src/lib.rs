pub mod categories;
pub mod config;
pub mod constants;
pub mod entries;
pub mod field_error;
pub mod form;
pub mod form_controller;
pub mod host;
pub mod list_controller;
pub mod models;
pub mod resource;
pub mod route;
#[cfg(feature = "server")]
pub mod server;
pub mod service;

// Re-export types at crate root for convenient importing
pub use crate::form_controller::{FormError, ResourceForm, ResourceFormController};
pub use crate::list_controller::ResourceListController;
pub use crate::resource::Resource;
pub use crate::route::{FormMode, RouteSnapshot};
pub use crate::service::{ResourceService, ServiceError};
