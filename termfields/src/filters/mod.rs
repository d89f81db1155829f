//! Named extension points for the term retrieval paths.
//!
//! A term store exposes four places where term records leave storage: a
//! taxonomy-scoped query, an object cross-reference query, a per-object
//! list, and a single-term get. Each one maps to a method here.
//! Implementations receive the retrieval outcome and must hand back a value
//! of the same shape; a failed retrieval passes through untouched, never
//! swallowed or replaced.
//!
//! Every method defaults to the identity, so an implementation only
//! overrides the paths it cares about. [`TermFieldDecorator`] implements
//! all four by delegating to its decoration operations.
//!
//! [`TermFieldDecorator`]: crate::decorator::TermFieldDecorator

pub mod normalizers;

use crate::errors::LookupResult;
use crate::types::{TaxonomySelector, Term, TermQueryArgs};

pub trait TermFilter {
    /// Term-list retrieval with taxonomy and query-args context.
    fn filter_queried_terms(
        &self,
        outcome: LookupResult<Vec<Term>>,
        _taxonomies: &TaxonomySelector,
        _args: &TermQueryArgs,
    ) -> LookupResult<Vec<Term>> {
        outcome
    }

    /// Term-list retrieval for object cross-references, with context.
    fn filter_object_terms(
        &self,
        outcome: LookupResult<Vec<Term>>,
        _taxonomies: &TaxonomySelector,
        _args: &TermQueryArgs,
    ) -> LookupResult<Vec<Term>> {
        outcome
    }

    /// Term-list retrieval for a single object, no context.
    fn filter_term_list(&self, outcome: LookupResult<Vec<Term>>) -> LookupResult<Vec<Term>> {
        outcome
    }

    /// Single-term retrieval.
    fn filter_term(&self, outcome: LookupResult<Term>) -> LookupResult<Term> {
        outcome
    }
}
