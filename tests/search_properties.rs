use eight_puzzle::engine::Board;
use eight_puzzle::heuristics::HeuristicKind;
use eight_puzzle::utils::parse_puzzle_definition;
use eight_puzzle::{solve, SolveOutcome, Solver};

fn board(grid: [[u8; 3]; 3]) -> Board {
    Board::from_grid(grid).unwrap()
}

#[test]
fn test_two_move_puzzle_from_definition() {
    let definition =
        parse_puzzle_definition("start\n1 2 3\n4 * 6\n7 5 8\ngoal\n1 2 3\n4 5 6\n7 8 *\n").unwrap();

    for option in 1..=3 {
        let outcome = solve(&definition.start, &definition.goal, option).unwrap();
        let report = outcome.solution().expect("solvable");
        assert_eq!(report.depth, 2, "heuristic option {}", option);
        assert_eq!(report.steps.first().unwrap().board, definition.start);
        assert_eq!(report.steps.last().unwrap().board, definition.goal);
    }
}

#[test]
fn test_consistent_heuristics_agree_on_depth() {
    let goal = Board::clockwise_goal();
    let misplaced = Solver::new(goal, HeuristicKind::MisplacedTiles);
    let manhattan = Solver::new(goal, HeuristicKind::Manhattan);

    for seed in 0..10 {
        let start = goal.scramble_with_seed(30, seed);
        let a = misplaced.solve(&start);
        let b = manhattan.solve(&start);
        let (a, b) = (a.solution().unwrap(), b.solution().unwrap());
        assert_eq!(a.depth, b.depth, "seed {}", seed);
    }
}

#[test]
fn test_solution_depth_bounded_by_scramble_length() {
    let goal = board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    for seed in 0..10 {
        let start = goal.scramble_with_seed(12, seed);
        for kind in HeuristicKind::ALL {
            let outcome = Solver::new(goal, kind).solve(&start);
            let report = outcome.solution().unwrap();
            if kind.is_consistent() {
                assert!(report.depth <= 12);
            }
            assert_eq!(report.depth % 2, 12 % 2);
        }
    }
}

#[test]
fn test_f_never_decreases_along_path() {
    let goal = Board::clockwise_goal();
    for seed in 0..10 {
        let start = goal.scramble_with_seed(40, seed);
        for kind in HeuristicKind::ALL {
            let outcome = Solver::new(goal, kind).solve(&start);
            let report = outcome.solution().unwrap();
            for pair in report.steps.windows(2) {
                assert!(pair[1].f >= pair[0].f, "{:?} seed {}", kind, seed);
            }
            assert_eq!(report.depth, report.steps.len() - 1);
        }
    }
}

#[test]
fn test_unsolvable_pair_exhausts_for_every_heuristic() {
    let goal = board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    let start = board([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
    assert!(!start.is_solvable_from(&goal));

    for option in 1..=3 {
        match solve(&start, &goal, option).unwrap() {
            SolveOutcome::NoSolution(stats) => {
                // Every board of the start's parity class is expanded exactly once or more.
                assert!(stats.nodes_explored >= 181_440);
                assert!(stats.nodes_created >= stats.nodes_explored);
            }
            SolveOutcome::Solved(_) => panic!("odd-parity pair must not be solvable"),
        }
    }
}
