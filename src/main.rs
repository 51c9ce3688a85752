//! Command line front end:
//! reads flower records from standard input,
//! holds out a contiguous validation slice,
//! grows a tree and reports the dump plus train/test accuracy.
use colored::Colorize;

use floret::evaluation;
use floret::sample::reader;
use floret::{DecisionTreeBuilder, FloretError};

use std::env;
use std::io;
use std::process::ExitCode;


struct Args {
    begin:    usize,
    end:      usize,
    depth:    usize,
    position: String,
}


fn parse_args(args: &[String]) -> Option<Args> {
    if !(4..=5).contains(&args.len()) {
        return None;
    }

    let begin = args[1].parse().ok()?;
    let end   = args[2].parse().ok()?;
    let depth = args[3].parse().ok()?;
    let position = args.get(4).cloned().unwrap_or_default();

    Some(Args { begin, end, depth, position, })
}


fn run(args: Args) -> Result<(), FloretError> {
    let stdin = io::stdin();
    let flowers = reader::from_reader(stdin.lock())?;

    let (training, validation) =
        evaluation::holdout(&flowers, args.begin, args.end)?;

    let tree = DecisionTreeBuilder::new()
        .max_depth(args.depth)
        .root_position(&args.position)
        .build();
    let f = tree.fit(&training)?;

    println!(
        "{}  flowers [{}, {})",
        "[VALIDATION]".bold().yellow(),
        args.begin,
        args.end,
    );
    println!(
        "{}   {}",
        "[MAX DEPTH ]".bold().yellow(),
        args.depth,
    );
    println!("\n{f}");

    let train = evaluation::accuracy(&f, &training);
    let test  = evaluation::accuracy(&f, &validation);
    println!("{}  {train}", "[TRAIN]".bold().green());
    println!("{}  {test}",  "[TEST ]".bold().yellow());

    Ok(())
}


fn main() -> ExitCode {
    let args = env::args().collect::<Vec<_>>();
    let Some(args) = parse_args(&args) else {
        eprintln!(
            "usage: floret <validation-begin> <validation-end> \
             <max-depth> [root-position] < flowers.csv"
        );
        return ExitCode::from(2);
    };

    if let Err(e) = run(args) {
        eprintln!("{} {e}", "error:".bold().red());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
