use super::*;
use crate::helpers::models::{create_catalog, create_problem};

#[test]
fn can_create_problem_with_universe_of_ordered_warehouses() {
    let problem = create_problem(
        &[(0, 10, 4, 0), (1, 10, 2, 0), (2, 10, 9, 0)],
        vec![(0, vec![0, 1]), (1, vec![1])],
    );

    assert_eq!(problem.orders.len(), 2);
    assert_eq!(problem.universe.size(), 2);
    assert_eq!(problem.universe.position(2), Some(0));
    assert_eq!(problem.universe.position(4), Some(1));
    assert_eq!(problem.universe.position(9), None);
    assert_eq!(problem.article_count(), 3);
}

#[test]
fn can_keep_input_order_sequence() {
    let problem = create_problem(&[(0, 10, 1, 0)], vec![(3, vec![0]), (1, vec![0]), (2, vec![0])]);

    assert_eq!(problem.orders.iter().map(|order| order.id).collect::<Vec<_>>(), vec![3, 1, 2]);
}

parameterized_test! {can_detect_invalid_orders, (orders, expected), {
    can_detect_invalid_orders_impl(orders, expected);
}}

can_detect_invalid_orders! {
    case_01_duplicates: (vec![(1, vec![0]), (2, vec![0]), (1, vec![0]), (2, vec![0])], "duplicated order ids: 1, 2"),
    case_02_unknown_article: (vec![(1, vec![0]), (2, vec![3])], "order 2 has unknown article 3"),
}

fn can_detect_invalid_orders_impl(orders: Vec<(OrderId, Vec<ArticleId>)>, expected: &str) {
    let result = Problem::new(create_catalog(&[(0, 10, 1, 0)]), orders);

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}
