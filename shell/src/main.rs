use std::{fmt::Display, num::ParseIntError, time::Instant};

use color_eyre::eyre;
use dialoguer::Input;
use regex::Regex;
use tracing::{trace, warn};

use conslist::{
    fold::{cons, flip, foldl, foldr},
    Cons, Stack,
};

mod demo;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::try_init().map_err(|e| eyre::eyre!(e))?;

    let separator = Regex::new(r"[^\d-]+")?;
    let mut stack = Stack::<i64>::new();

    loop {
        let input: String = Input::new().interact()?;
        let start = Instant::now();

        if let Some(command) = input.strip_prefix("/") {
            let items = command.split_whitespace().collect::<Vec<_>>();

            match items.as_slice() {
                [] => (),
                ["quit", ..] => return Ok(()),
                ["demo", ..] => {
                    if let Err(e) = demo::run() {
                        warn!(error = %e, "walk-through failed");
                    }
                }
                ["push", values @ ..] => match parse_values(&separator, &values.join(" ")) {
                    Ok(values) => values.into_iter().for_each(|value| stack.push(value)),
                    Err(e) => warn!(error = %e, "failed to push"),
                },
                ["pop"] => match stack.pop() {
                    Ok(value) => println!(" :: {}", value),
                    Err(e) => println!(" :: {}", e),
                },
                ["pop", default] => match default.parse() {
                    Ok(default) => println!(" :: {}", stack.pop_or(default)),
                    Err(e) => warn!(error = %e, "invalid default"),
                },
                ["peek", ..] => match stack.peek() {
                    Some(value) => println!(" :: {}", value),
                    None => println!(" :: empty"),
                },
                ["stack", ..] => println!(" :: {}", render(&stack.chain())),
                _ => println!("unrecognised command: {}", items.join(" ")),
            }

            trace!(command = ?command, duration = ?start.elapsed(), "command executed");
            continue;
        }

        match parse_values(&separator, &input) {
            Ok(values) => report(Cons::from_sequence(values)),
            Err(e) => warn!(error = %e, "failed to parse a list"),
        }

        trace!(input = ?input, duration = ?start.elapsed(), "list processed");
    }
}

/// Split the input on anything that can't be a part of an integer and parse the pieces.
fn parse_values(separator: &Regex, input: &str) -> Result<Vec<i64>, ParseIntError> {
    separator
        .split(input)
        .filter(|piece| !piece.is_empty())
        .map(str::parse)
        .collect()
}

/// Print the list along with what the folds make of it.
fn report(xs: Option<Cons<i64>>) {
    let reversed = foldl(flip(cons), xs.clone(), None);
    let copied = foldr(cons, xs.clone(), None);
    let sum = foldl(|acc, x| acc + x, xs.clone(), 0);

    println!(" :: list:     {}", render(&xs));
    println!(" :: reversed: {}", render(&reversed));
    println!(" :: copied:   {}", render(&copied));
    println!(" :: sum:      {}", sum);
}

/// Render a chain as a parenthesised list, `()` being the empty one.
pub(crate) fn render<T>(chain: &Option<Cons<T>>) -> String
where
    T: Clone + Display,
{
    let values = chain
        .iter()
        .flat_map(Cons::iter)
        .map(|value| value.to_string())
        .collect::<Vec<_>>();

    format!("({})", values.join(" "))
}
