use reqwest::Client;
use serde_json::{Value, json};

use crate::constants::MIN_NAME_LENGTH;
use crate::form::{FormGroup, Validator};
use crate::form_controller::{FormError, ResourceForm};
use crate::models::{Entry, EntryType};
use crate::service::ResourceService;

/// Route base of the entry pages.
pub const ENTRIES_BASE_PATH: &str = "entries";

pub fn entry_service(http: Client, api_base_url: &str) -> ResourceService<Entry> {
    ResourceService::new(http, api_base_url)
}

/// Parses an amount typed as `1.200,50`, `1200,50` or `1200.50`.
///
/// A comma, when present, is the decimal separator and dots group thousands.
pub fn parse_amount(amount: &str) -> Option<f64> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntryForm;

impl ResourceForm for EntryForm {
    type Record = Entry;

    fn build_form(&self) -> FormGroup {
        FormGroup::new()
            .field("id", Value::Null, vec![])
            .field(
                "name",
                json!(""),
                vec![Validator::Required, Validator::MinLength(MIN_NAME_LENGTH)],
            )
            .field("description", Value::Null, vec![])
            .field(
                "type",
                json!(EntryType::Expense.as_str()),
                vec![Validator::Required],
            )
            .field("amount", json!(""), vec![Validator::Required])
            .field("date", json!(""), vec![Validator::Required])
            .field("paid", json!(true), vec![Validator::Required])
            .field("categoryId", Value::Null, vec![Validator::Required])
    }

    // Select inputs hand the category id over as text.
    fn to_record(&self, mut value: Value) -> Result<Entry, FormError> {
        if let Some(category_id) = value.get_mut("categoryId") {
            if let Value::String(text) = category_id {
                let id = text.trim().parse::<i64>().map_err(|_| FormError::InvalidField {
                    field: "categoryId".to_string(),
                    message: format!("'{}' is not a category id", text),
                })?;
                *category_id = json!(id);
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    fn creation_page_title(&self) -> String {
        "Cadastro de Novo Lançamento".to_string()
    }

    fn edition_page_title(&self, record: Option<&Entry>) -> String {
        let name = record.map(|e| e.name.as_str()).unwrap_or_default();
        format!("Editando Lançamento: {}", name)
    }
}
