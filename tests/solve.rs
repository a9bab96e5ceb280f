use fifteen_puzzle::heuristic::Manhattan;
use fifteen_puzzle::{manhattan, solve, Grid, Move, Problem, SearchConfig, Solution, SolveError};
use rand::{rngs::StdRng, SeedableRng};

fn grid(rows: [[u8; 4]; 4]) -> Grid {
    Grid::new(rows).unwrap()
}

fn check(problem: &Problem, config: &SearchConfig) -> Solution {
    let solution = solve(problem, config).unwrap();
    assert_eq!(solution.moves.len(), solution.depth as usize);
    assert_eq!(solution.f_trace.len(), solution.moves.len() + 1);
    assert_eq!(solution.replay(&problem.initial), Some(problem.goal));
    assert_eq!(solution.f_trace[0], root_estimate(problem, config));
    assert_eq!(*solution.f_trace.last().unwrap(), solution.depth);
    solution
}

fn root_estimate(problem: &Problem, config: &SearchConfig) -> u32 {
    Manhattan::new(&problem.goal, config.count_blank).evaluate(&problem.initial)
}

#[test]
fn initial_equal_to_goal() {
    let goal = Grid::solved();
    let solution = check(&Problem::new(goal, goal), &SearchConfig::default());

    assert_eq!(solution.depth, 0);
    assert!(solution.moves.is_empty());
    assert_eq!(solution.f_trace, vec![0]);
    assert_eq!(solution.nodes_generated, 1);
}

#[test]
fn single_move_down() {
    let initial = grid([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 0], [13, 14, 15, 12]]);
    let problem = Problem::new(initial, Grid::solved());
    let solution = check(&problem, &SearchConfig::default());

    assert_eq!(solution.depth, 1);
    assert_eq!(solution.move_string(), "D");
    assert_eq!(solution.f_trace, vec![manhattan(&initial, &problem.goal), 1]);
}

#[test]
fn three_move_instance() {
    // Goal with the blank walked up, left, then down.
    let initial = grid([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 15, 11], [13, 14, 0, 12]]);
    let problem = Problem::new(initial, Grid::solved());
    let solution = check(&problem, &SearchConfig::default());

    assert_eq!(solution.depth, 3);
    assert_eq!(solution.moves, vec![Move::Up, Move::Right, Move::Down]);
    assert_eq!(solution.f_trace, vec![4, 5, 4, 3]);
}

#[test]
fn custom_goal() {
    let goal = grid([[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]);
    let initial = goal
        .apply_move(Move::Right)
        .and_then(|g| g.apply_move(Move::Down))
        .unwrap();
    let solution = check(&Problem::new(initial, goal), &SearchConfig::default());
    assert_eq!(solution.moves, vec![Move::Up, Move::Left]);
}

#[test]
fn scrambled_instances_replay_to_goal() {
    let goal = Grid::solved();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let initial = goal.scramble(12, &mut rng);
        let problem = Problem::new(initial, goal);
        check(&problem, &SearchConfig::default());

        let tiles_only = SearchConfig {
            count_blank: false,
            ..SearchConfig::default()
        };
        check(&problem, &tiles_only);
    }
}

#[test]
fn parity_mismatch_is_no_solution() {
    let initial = grid([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 15, 14, 0]]);
    let err = solve(&Problem::new(initial, Grid::solved()), &SearchConfig::default()).unwrap_err();
    assert_eq!(err, SolveError::NoSolution);
}

#[test]
fn unchecked_unsolvable_instance_hits_budget() {
    let initial = grid([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 15, 14, 0]]);
    let config = SearchConfig {
        max_nodes: Some(5_000),
        check_solvability: false,
        ..SearchConfig::default()
    };
    let err = solve(&Problem::new(initial, Grid::solved()), &config).unwrap_err();
    assert_eq!(err, SolveError::NodeBudgetExceeded { limit: 5_000 });
}

#[test]
fn repeated_runs_agree() {
    let goal = Grid::solved();
    let initial = goal.scramble(16, &mut StdRng::seed_from_u64(8));
    let problem = Problem::new(initial, goal);

    let a = solve(&problem, &SearchConfig::default()).unwrap();
    let b = solve(&problem, &SearchConfig::default()).unwrap();
    assert_eq!(a, b);
}
