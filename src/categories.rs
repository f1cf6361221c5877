use reqwest::Client;
use serde_json::{Value, json};

use crate::constants::MIN_NAME_LENGTH;
use crate::form::{FormGroup, Validator};
use crate::form_controller::ResourceForm;
use crate::models::Category;
use crate::service::ResourceService;

/// Route base of the category pages.
pub const CATEGORIES_BASE_PATH: &str = "categories";

pub fn category_service(http: Client, api_base_url: &str) -> ResourceService<Category> {
    ResourceService::new(http, api_base_url)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryForm;

impl ResourceForm for CategoryForm {
    type Record = Category;

    fn build_form(&self) -> FormGroup {
        FormGroup::new()
            .field("id", Value::Null, vec![])
            .field(
                "name",
                json!(""),
                vec![Validator::Required, Validator::MinLength(MIN_NAME_LENGTH)],
            )
            .field("description", Value::Null, vec![])
    }

    fn creation_page_title(&self) -> String {
        "Cadastro de Nova Categoria".to_string()
    }

    fn edition_page_title(&self, record: Option<&Category>) -> String {
        let name = record.map(|c| c.name.as_str()).unwrap_or_default();
        format!("Editando Categoria: {}", name)
    }
}
