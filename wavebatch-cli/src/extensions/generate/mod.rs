//! Contains logic to generate random problems for testing.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use rand::Rng;
use wavebatch_json::format::Id;
use wavebatch_json::format::problem::{Article, ArticleLocation, Order, Problem};

/// Specifies characteristics of a generated problem.
#[derive(Clone, Debug)]
pub struct GenerateConfig {
    /// Amount of orders.
    pub orders: usize,
    /// Amount of articles in the catalog.
    pub articles: usize,
    /// Amount of warehouses.
    pub warehouses: usize,
    /// Amount of aisles per warehouse.
    pub aisles: usize,
    /// Maximum volume of an article.
    pub max_volume: u64,
    /// Maximum amount of articles in an order.
    pub max_order_size: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { orders: 100, articles: 50, warehouses: 5, aisles: 10, max_volume: 1_000, max_order_size: 10 }
    }
}

/// Generates a random problem which passes validation with default limits.
pub fn generate_problem(config: &GenerateConfig, random: &mut impl Rng) -> Result<Problem, String> {
    if config.articles == 0 || config.warehouses == 0 || config.aisles == 0 {
        return Err("amount of articles, warehouses and aisles should be positive".to_string());
    }

    if config.max_volume == 0 || config.max_order_size == 0 {
        return Err("max volume and max order size should be positive".to_string());
    }

    let articles = (0..config.articles)
        .map(|idx| Article { id: Id::Number(idx as u64), volume: random.gen_range(1..=config.max_volume) })
        .collect();

    let locations = (0..config.articles)
        .map(|idx| ArticleLocation {
            article_id: Id::Number(idx as u64),
            warehouse: Id::Number(random.gen_range(0..config.warehouses) as u64),
            aisle: Id::Number(random.gen_range(0..config.aisles) as u64),
        })
        .collect();

    let orders = (0..config.orders)
        .map(|idx| {
            let size = random.gen_range(1..=config.max_order_size);
            let article_ids =
                (0..size).map(|_| Id::Number(random.gen_range(0..config.articles) as u64)).collect::<Vec<_>>();

            Order { id: Id::Number(idx as u64), article_ids }
        })
        .collect();

    Ok(Problem { articles, locations, orders })
}
