use super::*;

#[test]
fn can_build_catalog_with_locations() {
    let mut builder = ArticleCatalogBuilder::default();
    builder.add_article(1, 100).add_article(2, 200);
    builder.set_location(2, 5, 3).set_location(1, 4, 1);

    let catalog = builder.build().expect("cannot build catalog");

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get(1),
        Some(&Article { id: 1, volume: 100, location: Location { warehouse: 4, aisle: 1 } })
    );
    assert_eq!(catalog.get(2).map(|article| article.location), Some(Location { warehouse: 5, aisle: 3 }));
    assert!(catalog.get(3).is_none());
}

#[test]
fn can_use_last_location_assignment() {
    let mut builder = ArticleCatalogBuilder::default();
    builder.add_article(1, 100).set_location(1, 1, 1).set_location(1, 2, 7);

    let catalog = builder.build().unwrap();

    assert_eq!(catalog.get(1).unwrap().location, Location { warehouse: 2, aisle: 7 });
}

parameterized_test! {can_detect_invalid_catalog, (articles, locations, expected), {
    can_detect_invalid_catalog_impl(articles, locations, expected);
}}

can_detect_invalid_catalog! {
    case_01_duplicates: (vec![(1, 10), (2, 10), (1, 20)], vec![(1, 0, 0), (2, 0, 0)], "duplicated article ids: 1"),
    case_02_zero_volume: (vec![(1, 0), (2, 10)], vec![(1, 0, 0), (2, 0, 0)], "articles with zero volume: 1"),
    case_03_unknown_location: (vec![(1, 10)], vec![(1, 0, 0), (3, 0, 0)], "location is assigned to unknown article: 3"),
    case_04_no_location: (vec![(1, 10), (2, 10), (3, 10)], vec![(2, 0, 0)], "articles without location: 1, 3"),
}

fn can_detect_invalid_catalog_impl(
    articles: Vec<(ArticleId, Volume)>,
    locations: Vec<(ArticleId, WarehouseId, AisleId)>,
    expected: &str,
) {
    let mut builder = ArticleCatalogBuilder::default();
    articles.into_iter().for_each(|(id, volume)| {
        builder.add_article(id, volume);
    });
    locations.into_iter().for_each(|(id, warehouse, aisle)| {
        builder.set_location(id, warehouse, aisle);
    });

    let result = builder.build();

    assert_eq!(result.err(), Some(expected.into()));
}
