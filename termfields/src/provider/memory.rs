//! In-memory providers, builder-style, for tests and fixtures.

use std::collections::HashMap;

use super::{FieldProvider, TaxonomyProvider};
use crate::types::{FieldDescriptor, FieldGroup, FieldValue, TaxonomyDescriptor, Term};

/// Taxonomy service backed by a plain map.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaxonomies {
    taxonomies: HashMap<String, TaxonomyDescriptor>,
}

impl MemoryTaxonomies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a taxonomy under its descriptor name.
    pub fn taxonomy(mut self, descriptor: TaxonomyDescriptor) -> Self {
        self.taxonomies.insert(descriptor.name.clone(), descriptor);
        self
    }
}

impl TaxonomyProvider for MemoryTaxonomies {
    fn get_taxonomy(&self, name: &str) -> Option<TaxonomyDescriptor> {
        self.taxonomies.get(name).cloned()
    }
}

/// Field service backed by plain maps.
///
/// Groups are attached per taxonomy, fields per group key, and values per
/// `(field key, term id)` pair.
#[derive(Debug, Clone, Default)]
pub struct MemoryFields {
    groups: HashMap<String, Vec<FieldGroup>>,
    fields: HashMap<String, Vec<FieldDescriptor>>,
    values: HashMap<(String, u64), FieldValue>,
}

impl MemoryFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a field group to a taxonomy.
    pub fn group(mut self, taxonomy: &str, group: FieldGroup) -> Self {
        self.groups.entry(taxonomy.to_string()).or_default().push(group);
        self
    }

    /// Add a field definition to a group.
    pub fn field(mut self, group_key: &str, field: FieldDescriptor) -> Self {
        self.fields.entry(group_key.to_string()).or_default().push(field);
        self
    }

    /// Set the value a term resolves for a field key.
    pub fn value(mut self, field_key: &str, term_id: u64, value: impl Into<FieldValue>) -> Self {
        self.values.insert((field_key.to_string(), term_id), value.into());
        self
    }
}

impl FieldProvider for MemoryFields {
    fn field_groups(&self, taxonomy: &str) -> Vec<FieldGroup> {
        self.groups.get(taxonomy).cloned().unwrap_or_default()
    }

    fn group_fields(&self, group: &FieldGroup) -> Vec<FieldDescriptor> {
        self.fields.get(&group.key).cloned().unwrap_or_default()
    }

    fn field_value(&self, field_key: &str, term: &Term) -> FieldValue {
        self.values
            .get(&(field_key.to_string(), term.term_id))
            .cloned()
            .unwrap_or(FieldValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_resolves_null() {
        let fields = MemoryFields::new();
        let term = Term::new(1, "genre", "Action");
        assert_eq!(fields.field_value("field_missing", &term), FieldValue::Null);
    }

    #[test]
    fn values_are_scoped_per_term() {
        let fields = MemoryFields::new()
            .value("field_color", 1, "dark")
            .value("field_color", 2, "light");
        let first = Term::new(1, "genre", "Action");
        let second = Term::new(2, "genre", "Comedy");
        assert_eq!(fields.field_value("field_color", &first), "dark");
        assert_eq!(fields.field_value("field_color", &second), "light");
    }
}
