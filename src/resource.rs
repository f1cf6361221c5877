use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record managed through the generic CRUD layer.
///
/// The identifier is assigned by the server and is `None` until the first
/// successful create. Once assigned it never changes.
pub trait Resource: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Collection path relative to the API base URL, e.g. `api/entries`.
    const API_PATH: &'static str;

    fn id(&self) -> Option<i64>;

    /// Returns the record carrying `id`. Used by the server when it assigns
    /// identifiers on create and when a PUT path id is authoritative.
    fn with_id(self, id: i64) -> Self;
}
