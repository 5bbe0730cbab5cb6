use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::process;
use std::time::Instant;
use sudoku_dlx::{ConstraintMatrix, DlxSolver, SudokuBoard};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        MainCommand::Solve(args) => execute_solve(args),
    }
}

fn execute_solve(args: SolveArgs) -> Result<(), String> {
    let board: SudokuBoard = args.puzzle.parse().map_err(|err| format!("{err}"))?;

    if let Some(path) = &args.dump_matrix {
        let matrix = ConstraintMatrix::from_board(&board).map_err(|err| format!("{err}"))?;
        let mut file = File::create(path).map_err(|err| format!("{err}"))?;
        matrix
            .write_incidence_csv(&mut file)
            .map_err(|err| format!("{err}"))?;
    }

    let limit = args
        .max_solutions
        .map(|value| {
            if value == 0 {
                Err("max-solutions must be greater than zero".to_string())
            } else {
                Ok(value as usize)
            }
        })
        .transpose()?;

    println!("Input:\n{board}\n");

    let mut solver = DlxSolver::new();
    let start_time = Instant::now();
    let solutions = solver
        .solve_with_limit(&board, limit)
        .map_err(|err| format!("{err}"))?;
    let elapsed = start_time.elapsed();

    if solutions.is_empty() {
        println!("No solutions found.");
    } else {
        for (idx, solution) in solutions.iter().enumerate() {
            println!("Solution {}:", idx + 1);
            println!("{solution}\n");
        }
        println!("Total solutions returned: {}", solutions.len());
    }
    println!("Time taken: {elapsed:?}");

    Ok(())
}

#[derive(Parser)]
#[command(name = "sudoku-cli", version, about = "Dancing Links Sudoku solver")]
struct Cli {
    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Subcommand)]
enum MainCommand {
    /// Solve a Sudoku puzzle and print every solution found
    Solve(SolveArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Puzzle as a comma-delimited list of values row by row (0 = empty), or as a
    /// digits-and-dots string for 9x9 boards.
    #[arg()]
    puzzle: String,

    /// Maximum number of solutions to return (default: enumerate all of them)
    #[arg(long)]
    max_solutions: Option<u32>,

    /// Write the constraint-incidence matrix to this file as CSV before solving
    #[arg(long)]
    dump_matrix: Option<std::path::PathBuf>,
}
