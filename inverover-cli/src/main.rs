//! A command line interface to *Inver-Over* TSP solver.
//!
//! ## Usage
//!
//! - solve TSP defined by a weight matrix using default settings and write result to stdout
//!
//!     `inverover-cli solve matrix.json`
//!
//! - solve TSP with a time limit and a repeatable random seed writing result to the file
//!
//!     `inverover-cli solve matrix.json --max-time 60 --seed 42 -o result.json`
//!
//! For more details, simply run
//!
//!     inverover-cli --help

mod commands;

use clap::Command;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("Inver-Over TSP Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to Inver-Over evolutionary TSP solver")
        .subcommand(get_solve_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, commands::create_write_buffer),
        _ => {
            eprintln!("no subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
