//! Term field decoration for taxonomy-backed content.
//!
//! Consumers register the taxonomies they care about, and every term record
//! flowing out of the four standard retrieval paths comes back enriched with
//! the custom-field values defined for its taxonomy. Field definitions and
//! values live behind the provider traits in [`provider`]; this crate only
//! resolves them once per taxonomy and attaches the values.
//!
//! The typical wiring:
//!
//! ```
//! use termfields::provider::memory::{MemoryFields, MemoryTaxonomies};
//! use termfields::{TaxonomyDescriptor, Term, TermFieldDecorator};
//!
//! let taxonomies = MemoryTaxonomies::new()
//!     .taxonomy(TaxonomyDescriptor::new("genre", "Genres"));
//! let mut decorator = TermFieldDecorator::new(taxonomies, MemoryFields::new());
//! decorator.register_taxonomy("genre");
//!
//! let term = decorator.decorate_term(Ok(Term::new(7, "genre", "Action")));
//! assert!(term.is_ok());
//! ```

pub mod config;
pub mod decorator;
pub mod errors;
pub mod filters;
pub mod provider;
pub mod types;

pub use config::DecoratorConfig;
pub use decorator::{TaxonomyFieldMap, TermFieldDecorator};
pub use errors::{ConfigError, LookupError, LookupResult};
pub use filters::TermFilter;
pub use provider::{FieldProvider, TaxonomyProvider};
pub use types::{
    FieldDescriptor, FieldGroup, FieldValue, TaxonomyDescriptor, TaxonomySelector, Term,
    TermFields, TermQueryArgs,
};
