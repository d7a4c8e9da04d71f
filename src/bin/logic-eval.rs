//! Logic Evaluator - Command Line Interface
//!
//! Prints the truth table report of each expression given on the command line
//! or read from a file, one expression per line.

use clap::Parser;
use logic_evaluator::report::{evaluate_file, Report};
use logic_evaluator::{EngineConfig, Error, TruthTable, DEFAULT_MAX_VARIABLES};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "logic-eval")]
#[command(about = "Truth tables, normal forms and minimization of boolean expressions", long_about = None)]
#[command(version)]
struct Args {
    /// Expressions to evaluate, e.g. "(A ^ B) ^ C"
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,

    /// Read expressions from a file, one per line ('#' starts a comment line)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Refuse tables with more variables than this
    #[arg(long = "max-variables", default_value_t = DEFAULT_MAX_VARIABLES)]
    max_variables: usize,

    /// Print the truth table rows
    #[arg(short = 't', long = "table")]
    table: bool,

    /// Print the Karnaugh map grid
    #[arg(short = 'k', long = "kmap")]
    kmap: bool,

    /// Log minimization steps (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn print_extras(table: &TruthTable, args: &Args) {
    if args.table {
        println!();
        print!("{}", table);
    }
    if args.kmap {
        println!();
        match table.karnaugh_map() {
            Ok(map) => print!("{}", map),
            Err(e) => println!("Karnaugh map unavailable: {}", e),
        }
    }
}

fn evaluate_expression(expression: &str, args: &Args, config: &EngineConfig) -> Result<(), Error> {
    let table = TruthTable::from_expression_with_config(expression, config)?;
    print!("{}", Report::from_table(&table));
    print_extras(&table, args);
    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = EngineConfig::new().with_max_variables(args.max_variables);

    if args.expressions.is_empty() && args.file.is_none() {
        eprintln!("No expressions given. Pass EXPR arguments or --file FILE.");
        process::exit(2);
    }

    let mut first = true;
    let mut separate = || {
        if !std::mem::take(&mut first) {
            println!();
        }
    };

    for expression in &args.expressions {
        separate();
        if let Err(e) = evaluate_expression(expression, &args, &config) {
            eprintln!("Error in expression {:?}: {}", expression, e);
            process::exit(1);
        }
    }

    if let Some(path) = &args.file {
        let results = match evaluate_file(path, &config) {
            Ok(results) => results,
            Err(e) => {
                eprintln!("Error reading '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        for line in results {
            separate();
            match line.result {
                Ok(report) => {
                    print!("{}", report);
                    if args.table || args.kmap {
                        // the report does not keep the table itself
                        match TruthTable::from_expression_with_config(&line.expression, &config) {
                            Ok(table) => print_extras(&table, &args),
                            Err(e) => eprintln!("Error rebuilding line {}: {}", line.line, e),
                        }
                    }
                }
                Err(e) => {
                    eprintln!(
                        "Error in '{}' line {} ({:?}): {}",
                        path.display(),
                        line.line,
                        line.expression,
                        e
                    );
                    process::exit(1);
                }
            }
        }
    }
}
