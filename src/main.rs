use std::io::{self, BufRead, Write};

use rambda::parser::{parse_query, parse_term};
use rambda::term::reduce::normal_form;
use rambda::types::{infer_constraint_show, infer_then_show};

/// Step bound for `:b`; untyped terms may have no normal form.
const REDUCTION_FUEL: usize = 1000;

fn main() -> anyhow::Result<()> {
    if env_logger::try_init_from_env(env_logger::Env::default().default_filter_or("error")).is_err()
    {
        eprintln!("logger was already initialized");
    }

    println!("rambda - enter a term like \\x. x, or term :: constraint");
    println!("         :b term reduces to normal form, :q quits");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("λ> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":q" {
            break;
        }

        if let Some(rest) = line.strip_prefix(":b") {
            reduce_command(rest.trim());
            continue;
        }

        match parse_query(line) {
            Ok((term, None)) => println!("{}", infer_then_show(&term)),
            Ok((term, Some(skeleton))) => println!("{}", infer_constraint_show(&term, &skeleton)),
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

fn reduce_command(input: &str) {
    match parse_term(input) {
        Ok(term) => match normal_form(&term, REDUCTION_FUEL) {
            Ok(normal) => println!("{normal}"),
            Err(last) => println!("no normal form after {REDUCTION_FUEL} steps, stuck at {last}"),
        },
        Err(e) => println!("{e}"),
    }
}
