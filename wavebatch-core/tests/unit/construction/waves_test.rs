use super::*;
use crate::helpers::models::create_problem_with_order_warehouses;
use crate::models::{OrderId, WarehouseId};

fn build_wave_orders(orders: &[(OrderId, Vec<WarehouseId>)], capacity: usize) -> Vec<Vec<OrderId>> {
    let problem = create_problem_with_order_warehouses(orders);

    build_waves(problem.orders.as_slice(), capacity, &mut IdSequence::default())
        .iter()
        .map(|wave| wave.orders().iter().map(|order| order.id).collect())
        .collect()
}

#[test]
fn can_use_order_with_most_warehouses_as_seed_and_sort_by_affinity() {
    let orders = vec![(0, vec![1]), (1, vec![1, 2, 3]), (2, vec![2]), (3, vec![1, 2])];

    let waves = build_wave_orders(orders.as_slice(), 100);

    assert_eq!(waves, vec![vec![1, 3, 0, 2]]);
}

#[test]
fn can_prefer_candidates_without_new_warehouses() {
    let orders = vec![(0, vec![1, 2]), (1, vec![3, 3]), (2, vec![1, 1])];

    let waves = build_wave_orders(orders.as_slice(), 4);

    assert_eq!(waves, vec![vec![0, 2], vec![1]]);
}

#[test]
fn can_stop_scan_at_first_candidate_exceeding_capacity() {
    let orders = vec![(0, vec![1, 2]), (1, vec![1]), (2, vec![1, 1, 1]), (3, vec![2])];

    let waves = build_wave_orders(orders.as_slice(), 4);

    assert_eq!(waves, vec![vec![0, 1], vec![2, 3]]);
}

parameterized_test! {can_respect_wave_capacity_boundary, (second_size, expected), {
    can_respect_wave_capacity_boundary_impl(second_size, expected);
}}

can_respect_wave_capacity_boundary! {
    case_01_exactly_at_capacity: (2, vec![vec![0, 1]]),
    case_02_capacity_plus_one: (3, vec![vec![0], vec![1]]),
}

fn can_respect_wave_capacity_boundary_impl(second_size: usize, expected: Vec<Vec<OrderId>>) {
    let orders = vec![(0, vec![1, 1]), (1, vec![1; second_size])];

    let waves = build_wave_orders(orders.as_slice(), 4);

    assert_eq!(waves, expected);
}

#[test]
fn can_place_over_capacity_order_alone() {
    let problem = create_problem_with_order_warehouses(&[(0, vec![1, 1, 1]), (1, vec![1])]);

    let waves = build_waves(problem.orders.as_slice(), 2, &mut IdSequence::default());

    assert_eq!(waves.len(), 2);
    assert_eq!(waves[0].orders()[0].id, 0);
    assert_eq!(waves[0].article_amount(), 3);
    assert_eq!(waves[1].orders()[0].id, 1);
}

#[test]
fn can_assign_wave_ids_from_sequence() {
    let problem = create_problem_with_order_warehouses(&[(0, vec![1]), (1, vec![2]), (2, vec![3])]);
    let mut ids = IdSequence::new(5);

    let waves = build_waves(problem.orders.as_slice(), 1, &mut ids);

    assert_eq!(waves.iter().map(|wave| wave.id()).collect::<Vec<_>>(), vec![5, 6, 7]);
    assert_eq!(ids.next_id(), 8);
}

#[test]
fn can_handle_empty_orders() {
    let waves = build_waves(&[], 10, &mut IdSequence::default());

    assert!(waves.is_empty());
}

#[test]
fn can_cover_every_order_exactly_once_deterministically() {
    let orders = (0..40_usize)
        .map(|id| (id, (0..(id % 4 + 1)).map(|wh| (id + wh) % 5).collect::<Vec<WarehouseId>>()))
        .collect::<Vec<_>>();

    let first = build_wave_orders(orders.as_slice(), 7);
    let second = build_wave_orders(orders.as_slice(), 7);

    let mut covered = first.iter().flatten().copied().collect::<Vec<_>>();
    covered.sort();
    assert_eq!(covered, (0..40).collect::<Vec<_>>());
    assert_eq!(first, second);
}
