use std::collections::BTreeMap;

use crate::models::{Category, Entry, EntryType};
use crate::resource::Resource;

/// One collection of records keyed by id. Ids are handed out monotonically
/// and never reused, even after deletes.
#[derive(Debug, Clone)]
pub struct Collection<T: Resource> {
    items: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Resource> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Resource> Collection<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        let mut collection = Self::default();
        for record in records {
            match record.id() {
                Some(id) => {
                    collection.next_id = collection.next_id.max(id + 1);
                    collection.items.insert(id, record);
                }
                None => {
                    collection.insert(record);
                }
            }
        }
        collection
    }

    pub fn all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.contains_key(&id)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Stores the record under a fresh id and returns the stored copy.
    pub fn insert(&mut self, record: T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let stored = record.with_id(id);
        self.items.insert(id, stored.clone());
        stored
    }

    /// Replaces an existing record. `None` when `id` is unknown.
    pub fn replace(&mut self, id: i64, record: T) -> Option<T> {
        let slot = self.items.get_mut(&id)?;
        let stored = record.with_id(id);
        *slot = stored.clone();
        Some(stored)
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        self.items.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDb {
    pub categories: Collection<Category>,
    pub entries: Collection<Entry>,
}

impl InMemoryDb {
    /// Sample data the development API starts with.
    pub fn seeded() -> Self {
        Self {
            categories: Collection::from_records(seed_categories()),
            entries: Collection::from_records(seed_entries()),
        }
    }
}

fn category(id: i64, name: &str, description: &str) -> Category {
    Category {
        id: Some(id),
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

fn seed_categories() -> Vec<Category> {
    vec![
        category(1, "Moradia", "Pagamentos de Contas da Casa"),
        category(2, "Saúde", "Plano de Saúde e Remédios"),
        category(3, "Lazer", "Cinema, parques, praia, etc"),
        category(4, "Salário", "Recebimento de Salário"),
        category(5, "Freelas", "Trabalhos como freelancer"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: i64,
    name: &str,
    kind: EntryType,
    amount: &str,
    date: &str,
    paid: bool,
    category_id: i64,
    description: Option<&str>,
) -> Entry {
    Entry {
        id: Some(id),
        name: name.to_string(),
        description: description.map(str::to_string),
        kind,
        amount: amount.to_string(),
        date: date.to_string(),
        paid,
        category_id: Some(category_id),
    }
}

fn seed_entries() -> Vec<Entry> {
    use EntryType::{Expense, Revenue};
    vec![
        entry(1, "Gás de Cozinha", Expense, "70,80", "14/10/2018", true, 1, Some("Botijão de gás")),
        entry(2, "Suplementos", Expense, "15,00", "14/10/2018", false, 2, None),
        entry(3, "Salário na Empresa X", Revenue, "4405,49", "15/10/2018", true, 4, None),
        entry(4, "Aluguel de Filme", Expense, "15,00", "16/10/2018", true, 3, None),
        entry(5, "Suplementos", Expense, "30,00", "17/10/2018", true, 2, None),
        entry(6, "Video Game da Filha", Expense, "15,00", "17/10/2018", false, 3, None),
    ]
}
