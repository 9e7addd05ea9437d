//! This module provides functionality to validate problem definition for logical correctness.

use crate::format::problem::*;
use crate::format::{FormatError, Id, MultiFormatError};
use rustc_hash::FxHashSet;
use wavebatch_core::models::Limits;
use wavebatch_core::utils::{combine_error_results, get_duplicates};

mod articles;
use self::articles::validate_articles;

mod orders;
use self::orders::validate_orders;

/// Validates problem definition on set of rules.
pub struct ValidationContext<'a> {
    /// An original problem definition.
    pub problem: &'a Problem,
    /// Capacity limits the problem is going to be solved with.
    pub limits: &'a Limits,

    article_ids: FxHashSet<&'a Id>,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem, limits: &'a Limits) -> Self {
        let article_ids = problem.articles.iter().map(|article| &article.id).collect();

        Self { problem, limits, article_ids }
    }

    /// Validates problem on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_articles(self)
            .err()
            .into_iter()
            .chain(validate_orders(self).err())
            .flat_map(|errors| errors.into_iter())
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Returns true if article with given id is present in the catalog.
    fn is_known_article(&self, id: &Id) -> bool {
        self.article_ids.contains(id)
    }
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a Id>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

fn sorted_unique<'a>(ids: impl Iterator<Item = &'a Id>) -> Vec<&'a Id> {
    let mut ids = ids.collect::<Vec<_>>();
    ids.sort();
    ids.dedup();

    ids
}
