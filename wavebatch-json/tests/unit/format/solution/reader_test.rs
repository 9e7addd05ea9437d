use super::*;
use crate::format::problem::JsonProblem;
use crate::format::solution::{Batch as ApiBatch, Item, Wave as ApiWave, create_solution};
use crate::helpers::problem::create_default_problem;
use wavebatch_core::models::problem::ArticleCatalogBuilder;
use wavebatch_core::solver::Solver;
use wavebatch_core::utils::Environment;

type Layout = (Vec<(usize, Vec<usize>, usize, Vec<usize>)>, Vec<(usize, Vec<(usize, usize)>, u64)>);

fn get_layout(solution: &Solution) -> Layout {
    (
        solution
            .waves
            .iter()
            .map(|wave| {
                let orders = wave.orders().iter().map(|order| order.id).collect();
                (wave.id(), orders, wave.article_amount(), wave.batch_ids().to_vec())
            })
            .collect(),
        solution
            .batches
            .iter()
            .map(|batch| {
                let items = batch.items().iter().map(|item| (item.order_id, item.article_id)).collect();
                (batch.id(), items, batch.volume())
            })
            .collect(),
    )
}

#[test]
fn can_read_written_solution() {
    let limits = Limits::default();
    let problem = Arc::new(create_default_problem().read_problem(&limits).expect("cannot read problem"));
    let solution = Solver::new(problem.clone(), limits.clone(), Environment::silent()).solve().expect("cannot solve");
    let api_solution = create_solution(&problem, &solution);

    let restored = read_solution(&problem, &api_solution, &limits).expect("cannot read solution");

    assert_eq!(get_layout(&restored), get_layout(&solution));
}

#[test]
fn can_report_unknown_ids() {
    let limits = Limits::default();
    let problem = create_default_problem().read_problem(&limits).expect("cannot read problem");
    let api_solution = ApiSolution {
        waves: vec![ApiWave { id: 0, batch_ids: vec![0], order_ids: vec![Id::Number(100), Id::from("zzz")], size: 2 }],
        batches: vec![ApiBatch {
            id: 0,
            items: vec![
                Item { order_id: Id::Number(100), article_id: Id::Number(1) },
                Item { order_id: Id::Number(100), article_id: Id::Number(77) },
            ],
            volume: 300,
        }],
    };

    let result = read_solution(&problem, &api_solution, &limits);

    assert_eq!(
        result.err(),
        Some(vec![
            "wave 0 has unknown order 'zzz'".to_string(),
            "batch 0 has unknown item: order '100', article '77'".to_string()
        ])
    );
}

#[test]
fn can_read_numeric_ids_when_index_is_missing() {
    let mut builder = ArticleCatalogBuilder::default();
    builder.add_article(5, 100).set_location(5, 1, 1);
    let catalog = Arc::new(builder.build().expect("cannot build catalog"));
    let problem = Problem::new(catalog, vec![(3, vec![5])]).expect("cannot create problem");
    let api_solution = ApiSolution {
        waves: vec![ApiWave { id: 4, batch_ids: vec![9], order_ids: vec![Id::Number(3)], size: 1 }],
        batches: vec![ApiBatch {
            id: 9,
            items: vec![Item { order_id: Id::Number(3), article_id: Id::Number(5) }],
            volume: 100,
        }],
    };

    let solution = read_solution(&problem, &api_solution, &Limits::default()).expect("cannot read solution");

    assert_eq!(get_layout(&solution), (vec![(4, vec![3], 1, vec![9])], vec![(9, vec![(3, 5)], 100)]));
}
