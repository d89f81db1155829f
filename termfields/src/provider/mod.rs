//! Seams to the external taxonomy and field services.
//!
//! The term store and the field-definition store are collaborators, not
//! parts of this crate. The decorator consumes them through these traits;
//! [`memory`] ships plain in-memory implementations for tests and fixtures.
//! All calls are synchronous and expected to be fast.

pub mod memory;

use crate::types::{FieldDescriptor, FieldGroup, FieldValue, TaxonomyDescriptor, Term};

/// Lookup into the taxonomy service.
pub trait TaxonomyProvider {
    /// Descriptor for a taxonomy, or `None` when the name is unknown.
    fn get_taxonomy(&self, name: &str) -> Option<TaxonomyDescriptor>;

    /// Whether the taxonomy exists at all.
    fn taxonomy_exists(&self, name: &str) -> bool {
        self.get_taxonomy(name).is_some()
    }
}

/// Lookup into the field-definition service.
pub trait FieldProvider {
    /// Field groups attached to a taxonomy. Empty when none are defined.
    fn field_groups(&self, taxonomy: &str) -> Vec<FieldGroup>;

    /// Field definitions belonging to a group.
    fn group_fields(&self, group: &FieldGroup) -> Vec<FieldDescriptor>;

    /// Current value of a field on a term. Missing values come back as
    /// [`FieldValue::Null`] and are attached as such.
    fn field_value(&self, field_key: &str, term: &Term) -> FieldValue;
}
