//! Term decoration against a registered taxonomy set.

use std::collections::HashMap;
use std::sync::RwLock;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::errors::LookupResult;
use crate::filters::TermFilter;
use crate::provider::{FieldProvider, TaxonomyProvider};
use crate::types::{TaxonomyDescriptor, TaxonomySelector, Term, TermFields, TermQueryArgs};

/// Per-taxonomy mapping from field name to the key values resolve by, in
/// definition order.
pub type TaxonomyFieldMap = IndexMap<String, String>;

type FieldMap = HashMap<String, TaxonomyFieldMap>;

/// Decorates term records with the custom-field values defined for their
/// taxonomy.
///
/// Construct one with the two service seams, register the taxonomies of
/// interest during setup, then route retrieval outcomes through the
/// [`TermFilter`] entry points (or call the `decorate_*` operations
/// directly). Registration takes `&mut self` and belongs to the setup
/// phase; decoration takes `&self` and may be shared across threads once
/// setup is done.
///
/// The field name → key mapping is resolved lazily on first decoration and
/// cached until the registered set changes. Field *values* are never
/// cached: each decoration fetches them fresh, one lookup per field.
pub struct TermFieldDecorator<T, F> {
    taxonomy_provider: T,
    field_provider: F,
    taxonomies: HashMap<String, TaxonomyDescriptor>,
    field_map: RwLock<Option<FieldMap>>,
}

impl<T, F> TermFieldDecorator<T, F>
where
    T: TaxonomyProvider,
    F: FieldProvider,
{
    pub fn new(taxonomy_provider: T, field_provider: F) -> Self {
        Self {
            taxonomy_provider,
            field_provider,
            taxonomies: HashMap::new(),
            field_map: RwLock::new(None),
        }
    }

    /// Register a taxonomy whose terms should carry custom fields.
    ///
    /// Names the taxonomy service does not know are ignored without error.
    /// Each successful registration drops the cached field map so the next
    /// resolution rebuilds it. Returns `&mut Self` for chaining.
    pub fn register_taxonomy(&mut self, name: &str) -> &mut Self {
        let Some(descriptor) = self.taxonomy_provider.get_taxonomy(name) else {
            debug!("ignoring unknown taxonomy {name:?}");
            return self;
        };
        *self.field_map.get_mut().unwrap() = None;
        self.taxonomies.insert(name.to_string(), descriptor);
        self
    }

    /// The field service this decorator resolves definitions and values
    /// through.
    pub fn field_provider(&self) -> &F {
        &self.field_provider
    }

    /// Whether any taxonomy has been registered.
    pub fn has_registered_taxonomies(&self) -> bool {
        !self.taxonomies.is_empty()
    }

    /// Whether any candidate named by the selector is registered.
    pub fn is_registered(&self, selector: &TaxonomySelector) -> bool {
        selector
            .candidate_names()
            .iter()
            .any(|name| self.taxonomies.contains_key(name))
    }

    /// Field name → key mapping for one taxonomy.
    ///
    /// Empty for unregistered taxonomies and for taxonomies without field
    /// definitions; never fails.
    pub fn resolve_taxonomy_fields(&self, taxonomy: &str) -> TaxonomyFieldMap {
        if !self.taxonomies.contains_key(taxonomy) {
            return TaxonomyFieldMap::new();
        }
        self.with_field_map(|map| map.get(taxonomy).cloned().unwrap_or_default())
    }

    /// Attach resolved field values to a single term.
    ///
    /// A failed retrieval, an unregistered taxonomy, and a taxonomy without
    /// fields all pass through untouched. Values overwrite same-named
    /// entries already on the term.
    pub fn decorate_term(&self, outcome: LookupResult<Term>) -> LookupResult<Term> {
        let mut term = outcome?;
        if self.taxonomies.contains_key(&term.taxonomy) {
            self.apply_fields(&mut term);
        }
        Ok(term)
    }

    /// Decorate every term in a retrieved list that belongs to a registered
    /// taxonomy.
    ///
    /// Order and length are preserved; terms of unregistered taxonomies
    /// ride along untouched.
    pub fn decorate_term_list(&self, outcome: LookupResult<Vec<Term>>) -> LookupResult<Vec<Term>> {
        if !self.has_registered_taxonomies() {
            return outcome;
        }
        let mut terms = outcome?;
        for term in &mut terms {
            if self.taxonomies.contains_key(&term.taxonomy) {
                self.apply_fields(term);
            }
        }
        Ok(terms)
    }

    /// Decorate a queried term list, honoring the query's field-selection
    /// mode.
    ///
    /// Queries that asked for ids, names, or counts carry nothing to
    /// decorate and pass through unchanged, as do queries whose taxonomies
    /// are all unregistered.
    pub fn decorate_queried_terms(
        &self,
        outcome: LookupResult<Vec<Term>>,
        taxonomies: &TaxonomySelector,
        args: &TermQueryArgs,
    ) -> LookupResult<Vec<Term>> {
        if outcome.is_err() || !self.is_registered(taxonomies) {
            return outcome;
        }
        if args.fields != TermFields::All {
            return outcome;
        }
        self.decorate_term_list(outcome)
    }

    fn apply_fields(&self, term: &mut Term) {
        let fields = self.resolve_taxonomy_fields(&term.taxonomy);
        if fields.is_empty() {
            return;
        }
        trace!("decorating term {} with {} fields", term.term_id, fields.len());
        for (field_name, field_key) in fields {
            let value = self.field_provider.field_value(&field_key, term);
            term.fields.insert(field_name, value);
        }
    }

    /// Runs `f` against the cached field map, building it first if a
    /// registration dropped it. The write path re-checks under the lock so
    /// a racing builder's map is reused instead of rebuilt.
    fn with_field_map<R>(&self, f: impl FnOnce(&FieldMap) -> R) -> R {
        {
            let cache = self.field_map.read().unwrap();
            if let Some(map) = cache.as_ref() {
                return f(map);
            }
        }
        let mut cache = self.field_map.write().unwrap();
        f(cache.get_or_insert_with(|| self.build_field_map()))
    }

    /// Queries the field service for every registered taxonomy and flattens
    /// the groups into name → key pairs. Taxonomies without groups (or
    /// whose groups define no fields) get no entry. Merging across groups
    /// is an additive union: the first group to define a name wins.
    fn build_field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        for taxonomy in self.taxonomies.keys() {
            let groups = self.field_provider.field_groups(taxonomy);
            if groups.is_empty() {
                continue;
            }
            let mut fields = TaxonomyFieldMap::new();
            for group in &groups {
                for field in self.field_provider.group_fields(group) {
                    fields.entry(field.name).or_insert(field.key);
                }
            }
            if !fields.is_empty() {
                map.insert(taxonomy.clone(), fields);
            }
        }
        debug!("field map built for {} of {} taxonomies", map.len(), self.taxonomies.len());
        map
    }
}

impl<T, F> TermFilter for TermFieldDecorator<T, F>
where
    T: TaxonomyProvider,
    F: FieldProvider,
{
    fn filter_queried_terms(
        &self,
        outcome: LookupResult<Vec<Term>>,
        taxonomies: &TaxonomySelector,
        args: &TermQueryArgs,
    ) -> LookupResult<Vec<Term>> {
        self.decorate_queried_terms(outcome, taxonomies, args)
    }

    fn filter_object_terms(
        &self,
        outcome: LookupResult<Vec<Term>>,
        taxonomies: &TaxonomySelector,
        args: &TermQueryArgs,
    ) -> LookupResult<Vec<Term>> {
        self.decorate_queried_terms(outcome, taxonomies, args)
    }

    fn filter_term_list(&self, outcome: LookupResult<Vec<Term>>) -> LookupResult<Vec<Term>> {
        self.decorate_term_list(outcome)
    }

    fn filter_term(&self, outcome: LookupResult<Term>) -> LookupResult<Term> {
        self.decorate_term(outcome)
    }
}
