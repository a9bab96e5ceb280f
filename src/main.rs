use crossterm::style::Stylize;
use fifteen_puzzle::{Grid, Problem, SearchConfig};
use rand::thread_rng;

const SCRAMBLE_MOVES: usize = 24;
const MAX_NODES: usize = 5_000_000;

fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.cells() {
        for &val in row {
            let cell = format!("{:2} ", val);
            if val == 0 {
                out.push_str(&cell.dark_grey().to_string());
            } else {
                out.push_str(&cell.bold().to_string());
            }
        }
        out.push('\n');
    }
    out
}

fn main() {
    env_logger::init();

    let goal = Grid::solved();
    println!("Goal Puzzle:\n{}", render(&goal));

    let initial = goal.scramble(SCRAMBLE_MOVES, &mut thread_rng());
    println!("Scrambled Puzzle:\n{}", render(&initial));

    let config = SearchConfig::default().with_max_nodes(MAX_NODES);
    let solution = match Problem::new(initial, goal).solve(&config) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            std::process::exit(1);
        }
    };
    println!(
        "Found solution with {} moves after generating {} nodes",
        solution.depth, solution.nodes_generated
    );

    let mut current = initial;
    for (item, f) in solution.moves.iter().zip(solution.f_trace.iter().skip(1)) {
        if let Some(next) = current.apply_move(*item) {
            current = next;
        }
        println!("{} (f = {})\n{}", item, f, render(&current));
    }
}
