use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORIES_API_PATH, ENTRIES_API_PATH};
use crate::resource::Resource;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Category {
    const API_PATH: &'static str = CATEGORIES_API_PATH;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    #[default]
    Expense,
    Revenue,
}

impl EntryType {
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Expense => "Despesa",
            EntryType::Revenue => "Receita",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Expense => "expense",
            EntryType::Revenue => "revenue",
        }
    }

    pub fn all() -> &'static [EntryType] {
        &[EntryType::Expense, EntryType::Revenue]
    }
}

/// A ledger entry. `amount` keeps the text the user typed (e.g. `"1.200,50"`)
/// and `date` is `dd/mm/yyyy`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: EntryType,
    pub amount: String,
    pub date: String,
    #[serde(default)]
    pub paid: bool,
    pub category_id: Option<i64>,
}

impl Entry {
    pub fn paid_text(&self) -> &'static str {
        if self.paid { "Pago" } else { "Pendente" }
    }
}

impl Resource for Entry {
    const API_PATH: &'static str = ENTRIES_API_PATH;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Body of a 422 response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}
