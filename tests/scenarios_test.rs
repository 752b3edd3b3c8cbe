// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end scenarios: the reference wheel (9 samples, 6-groups covering
//! every 4-group), index shape checks, parameter rejection, and a synthetic
//! instance where one j-group cannot be covered.

mod common;

use common::{assert_valid_cover, lettered_context};
use covering_design::context::SelectionContext;
use covering_design::engine::{exact, greedy, select_exact, select_greedy, ExactSelector, GreedyOutcome, SolverKind};
use covering_design::problem::{Parameters, Universe};
use covering_design::report::CanonicalSelection;
use covering_design::{CoverError, ParameterError};

#[test]
fn test_scenario_a_nine_samples_six_four_four() {
    let universe = Universe::parse("A,B,C,D,E,F,G,H,I").unwrap();
    let mut ctx = SelectionContext::new(universe.clone(), Parameters::new(45, 9, 6, 4, 4, 1)).unwrap();
    assert_eq!(ctx.index().num_j_groups(), 126);
    assert_eq!(ctx.index().num_k_groups(), 84);

    let outcome = greedy::run(&mut ctx);
    let selection = match &outcome {
        GreedyOutcome::Satisfied(selection) => selection,
        GreedyOutcome::Stalled(d) => panic!("stalled with {} unsatisfied", d.unsatisfied.len()),
    };
    assert_valid_cover(&ctx, selection);
    // With s = j every j-group must sit inside a selected k-group
    for &j_group in ctx.index().j_groups() {
        assert!(selection.groups().iter().any(|&k_group| j_group.is_subset(k_group)));
    }
    // Schönheim lower bound for C(9, 6, 4)
    assert!(selection.len() >= 11);

    let again = select_greedy(&universe, 6, 4, 4, 1).unwrap();
    assert_eq!(again.selection().len(), selection.len());
    assert_eq!(
        CanonicalSelection::from_selection(again.selection(), &universe),
        CanonicalSelection::from_selection(selection, &universe)
    );
}

#[test]
#[ignore = "microlp needs minutes to prove optimality for 84 variables"]
fn test_scenario_a_exact_finds_twelve() {
    let universe = Universe::lettered(9).unwrap();
    let selector = ExactSelector::from_kind(SolverKind::Microlp);
    let outcome = select_exact(&universe, 6, 4, 4, 1, &selector).unwrap();
    let selection = outcome.selection().expect("optimal selection");
    assert_eq!(selection.len(), 12);

    let ctx = lettered_context(9, 6, 4, 4, 1);
    assert_valid_cover(&ctx, selection);
    assert!(exact::is_slow_model(ctx.params()));
}

#[test]
fn test_scenario_b_index_shape() {
    let ctx = lettered_context(7, 4, 4, 3, 1);
    let index = ctx.index();
    assert_eq!(index.num_j_groups(), 35);
    for j_id in 0..index.num_j_groups() {
        assert_eq!(index.s_subgroups(j_id).count(), 4);
        // The j-group itself plus 4 choices of 3 members x 3 outsiders
        assert_eq!(index.covered_by(j_id).len(), 13);
    }
}

#[test]
fn test_scenario_c_parameter_error() {
    let universe = Universe::lettered(9).unwrap();
    assert_eq!(
        select_greedy(&universe, 6, 4, 5, 1),
        Err(CoverError::Parameter(ParameterError::Ordering { n: 9, k: 6, j: 4, s: 5 }))
    );
    let selector = ExactSelector::from_kind(SolverKind::Microlp);
    assert_eq!(
        select_exact(&universe, 6, 4, 5, 1, &selector),
        Err(CoverError::Parameter(ParameterError::Ordering { n: 9, k: 6, j: 4, s: 5 }))
    );
}

fn without_abc_cover() -> SelectionContext {
    let universe = Universe::lettered(6).unwrap();
    let abc = universe.element_set(&["A", "B", "C"]).unwrap();
    SelectionContext::restricted(universe, Parameters::for_universe_size(6, 4, 3, 3, 1), |k| {
        !abc.is_subset(k)
    })
    .unwrap()
}

#[test]
fn test_scenario_d_exact_structural_infeasibility() {
    let mut ctx = without_abc_cover();
    let selector = ExactSelector::from_kind(SolverKind::Microlp);
    assert_eq!(
        selector.select(&mut ctx),
        Err(CoverError::StructuralInfeasibility {
            j_group: vec!["A".to_string(), "B".to_string(), "C".to_string()]
        })
    );
}

#[test]
fn test_scenario_d_greedy_stalls_with_partial_selection() {
    let mut ctx = without_abc_cover();
    match greedy::run(&mut ctx) {
        GreedyOutcome::Stalled(diagnostic) => {
            assert!(!diagnostic.selection.is_empty());
            assert_eq!(diagnostic.unsatisfied, vec![0]);
            assert_eq!(ctx.j_group_labels(0), vec!["A", "B", "C"]);
            // Everything else got covered
            assert_eq!(diagnostic.selection.unsatisfied_count(), 1);
        }
        other => panic!("expected stall, got {:?}", other),
    }
}
