use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::filters::normalizers::split_taxonomy_list;

/// Custom field values are opaque: whatever the field service returns is
/// attached to the term as-is.
pub type FieldValue = serde_json::Value;

/// A single term within a taxonomy.
///
/// Custom fields resolved during decoration land in [`Term::fields`], an
/// insertion-ordered map that serializes flattened beside the native
/// attributes. Decoration mutates the record in place and hands the same
/// term back, never a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub term_id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub taxonomy: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub count: u64,
    /// Decorated custom fields, keyed by field name, in definition order.
    #[serde(flatten)]
    pub fields: IndexMap<String, FieldValue>,
}

impl Term {
    pub fn new(term_id: u64, taxonomy: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            term_id,
            name: name.into(),
            slug: String::new(),
            taxonomy: taxonomy.into(),
            description: String::new(),
            parent: 0,
            count: 0,
            fields: IndexMap::new(),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Value of a decorated custom field, if present.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

/// Descriptor the taxonomy service returns for a known taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyDescriptor {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub hierarchical: bool,
}

impl TaxonomyDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            hierarchical: false,
        }
    }

    pub fn hierarchical(mut self) -> Self {
        self.hierarchical = true;
        self
    }
}

/// A named bundle of field definitions scoped to one taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub key: String,
    pub title: String,
}

impl FieldGroup {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// A field definition: a display name plus the stable key the value service
/// resolves values by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub key: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// Shape of the records a term query asked for.
///
/// Only [`TermFields::All`] queries return full term objects, so only those
/// can carry decorated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermFields {
    #[default]
    All,
    Ids,
    Names,
    Slugs,
    Count,
}

/// Arguments a term query was issued with, as far as decoration cares.
#[derive(Debug, Clone, Default)]
pub struct TermQueryArgs {
    pub fields: TermFields,
}

impl TermQueryArgs {
    pub fn with_fields(fields: TermFields) -> Self {
        Self { fields }
    }
}

/// Taxonomy context attached to a term query.
///
/// Some retrieval paths hand the queried taxonomies over as a structured
/// list, others as a preformatted string with quoted, `", "`-joined entries.
/// Both shapes normalize to the same candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomySelector {
    /// A bare name, or a `", "`-delimited list with optional single quotes.
    Raw(String),
    /// An already-structured list of names, used verbatim.
    List(Vec<String>),
}

impl TaxonomySelector {
    /// Candidate taxonomy names, normalized.
    pub fn candidate_names(&self) -> Vec<String> {
        match self {
            Self::Raw(raw) => split_taxonomy_list(raw),
            Self::List(names) => names.clone(),
        }
    }
}

impl From<&str> for TaxonomySelector {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for TaxonomySelector {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<Vec<String>> for TaxonomySelector {
    fn from(names: Vec<String>) -> Self {
        Self::List(names)
    }
}

impl From<&[&str]> for TaxonomySelector {
    fn from(names: &[&str]) -> Self {
        Self::List(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TaxonomySelector {
    fn from(names: [&str; N]) -> Self {
        Self::List(names.iter().map(|name| name.to_string()).collect())
    }
}
