#[cfg(test)]
#[path = "../../../tests/unit/models/problem/article_test.rs"]
mod article_test;

use crate::models::common::{AisleId, ArticleId, Volume, WarehouseId};
use crate::utils::{GenericResult, get_duplicates};
use rustc_hash::{FxHashMap, FxHashSet};

/// Specifies physical location of an article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// A warehouse where article is stored.
    pub warehouse: WarehouseId,
    /// An aisle inside the warehouse.
    pub aisle: AisleId,
}

/// Represents an article which can be ordered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    /// An unique article id.
    pub id: ArticleId,
    /// Article volume.
    pub volume: Volume,
    /// Article location.
    pub location: Location,
}

/// Keeps all known articles. Immutable once built.
#[derive(Debug, Default)]
pub struct ArticleCatalog {
    articles: FxHashMap<ArticleId, Article>,
}

impl ArticleCatalog {
    /// Returns article by its id.
    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    /// Returns amount of articles in catalog.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Returns true if catalog has no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Returns an iterator over all articles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> + '_ {
        self.articles.values()
    }
}

/// Provides a way to build an article catalog: articles are registered first and get their
/// locations assigned afterwards from a location table.
#[derive(Debug, Default)]
pub struct ArticleCatalogBuilder {
    volumes: Vec<(ArticleId, Volume)>,
    locations: Vec<(ArticleId, Location)>,
}

impl ArticleCatalogBuilder {
    /// Registers an article with its volume.
    pub fn add_article(&mut self, id: ArticleId, volume: Volume) -> &mut Self {
        self.volumes.push((id, volume));
        self
    }

    /// Assigns a location to a previously registered article. Last assignment wins.
    pub fn set_location(&mut self, id: ArticleId, warehouse: WarehouseId, aisle: AisleId) -> &mut Self {
        self.locations.push((id, Location { warehouse, aisle }));
        self
    }

    /// Builds the catalog checking that every article is unique, has positive volume and a location.
    pub fn build(&mut self) -> GenericResult<ArticleCatalog> {
        if let Some(ids) = get_duplicates(self.volumes.iter().map(|(id, _)| id)) {
            return Err(format!("duplicated article ids: {}", join_ids(&ids)).into());
        }

        let empty = self.volumes.iter().filter(|(_, volume)| *volume == 0).map(|(id, _)| *id).collect::<Vec<_>>();
        if !empty.is_empty() {
            return Err(format!("articles with zero volume: {}", join_ids(&empty)).into());
        }

        let known = self.volumes.iter().map(|(id, _)| *id).collect::<FxHashSet<_>>();
        let mut locations = FxHashMap::<ArticleId, Location>::default();
        for (id, location) in self.locations.iter() {
            if !known.contains(id) {
                return Err(format!("location is assigned to unknown article: {id}").into());
            }
            locations.insert(*id, *location);
        }

        let missing =
            self.volumes.iter().filter(|(id, _)| !locations.contains_key(id)).map(|(id, _)| *id).collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(format!("articles without location: {}", join_ids(&missing)).into());
        }

        let articles = self
            .volumes
            .iter()
            .map(|&(id, volume)| (id, Article { id, volume, location: locations[&id] }))
            .collect();

        Ok(ArticleCatalog { articles })
    }
}

fn join_ids(ids: &[ArticleId]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}
