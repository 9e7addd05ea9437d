use super::*;
use crate::format::problem::JsonProblem;
use crate::format::solution::deserialize_solution;
use crate::helpers::problem::create_default_problem;
use std::io::BufReader;
use std::sync::Arc;
use wavebatch_core::models::Limits;
use wavebatch_core::models::problem::ArticleCatalogBuilder;
use wavebatch_core::solver::Solver;
use wavebatch_core::utils::Environment;

fn solve(problem: Problem) -> (Arc<Problem>, Solution) {
    let problem = Arc::new(problem);
    let solution =
        Solver::new(problem.clone(), Limits::default(), Environment::silent()).solve().expect("cannot solve");

    (problem, solution)
}

fn create_item(order_id: u64, article_id: u64) -> Item {
    Item { order_id: Id::Number(order_id), article_id: Id::Number(article_id) }
}

#[test]
fn can_create_solution_with_original_ids() {
    let (problem, solution) = solve(create_default_problem().read_problem(&Limits::default()).expect("cannot read"));

    let solution = create_solution(&problem, &solution);

    assert_eq!(solution, ApiSolution {
        waves: vec![ApiWave {
            id: 0,
            batch_ids: vec![0, 1, 2],
            order_ids: vec![Id::Number(300), Id::Number(100), Id::Number(200)],
            size: 5,
        }],
        batches: vec![
            ApiBatch {
                id: 0,
                items: vec![create_item(300, 1), create_item(100, 1), create_item(100, 2)],
                volume: 1_100,
            },
            ApiBatch { id: 1, items: vec![create_item(300, 3)], volume: 9_000 },
            ApiBatch { id: 2, items: vec![create_item(200, 3)], volume: 9_000 },
        ],
    });
}

#[test]
fn can_create_solution_with_core_ids_when_index_is_missing() {
    let mut builder = ArticleCatalogBuilder::default();
    builder.add_article(5, 100).set_location(5, 1, 1);
    let catalog = Arc::new(builder.build().expect("cannot build catalog"));
    let (problem, solution) = solve(Problem::new(catalog, vec![(3, vec![5])]).expect("cannot create problem"));

    let solution = create_solution(&problem, &solution);

    assert_eq!(solution.waves[0].order_ids, vec![Id::Number(3)]);
    assert_eq!(solution.batches[0].items, vec![create_item(3, 5)]);
}

#[test]
fn can_write_solution_in_json_format() {
    let (problem, solution) = solve(create_default_problem().read_problem(&Limits::default()).expect("cannot read"));
    let mut buffer = vec![];

    solution.write_json(&problem, BufWriter::new(&mut buffer)).expect("cannot write solution");

    let json = String::from_utf8(buffer).expect("invalid utf8");
    assert!(json.contains(r#""OrderIds": ["#));
    let restored = deserialize_solution(BufReader::new(json.as_bytes())).expect("cannot read solution");
    assert_eq!(restored, create_solution(&problem, &solution));
}
