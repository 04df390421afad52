//! Walk-through of the library: aliasing, lazy evaluation, folds and the stack.

use color_eyre::eyre::{self, eyre};
use tracing::{info, instrument};

use conslist::{
    fold::{cons, flip, foldl, foldr},
    Cons, LazyCons, Stack,
};

use crate::render;

#[instrument]
pub fn run() -> eyre::Result<()> {
    let xs = Cons::from_sequence(vec![1i64, 2, 3]).ok_or_else(|| eyre!("built an empty list"))?;
    xs.iter().for_each(|x| println!("{}", x));

    // `ys` and the tail of `xs` are the same cell.
    let ys = tail_of(&xs)?;
    tail_of(&xs)?.update_value(|v| *v = -*v);
    ys.iter().for_each(|y| println!("{}", y));

    let zs = LazyCons::from_sequence(xs.iter())
        .ok_or_else(|| eyre!("built an empty lazy list"))?;
    println!(" :: lazy before traversal: {:?}", zs);

    // Only the first traversal evaluates tails, run with RUST_LOG=conslist=debug to see it.
    zs.iter().for_each(|z| println!("{}", z));
    zs.iter().for_each(|z| println!("{}", z));
    println!(" :: lazy after traversal: {:?}", zs);

    let xs = Some(xs);
    println!(" :: reversed: {}", render(&foldl(flip(cons), xs.clone(), None)));
    println!(" :: copied:   {}", render(&foldr(cons, xs, None)));

    let mut stack = Stack::new();
    stack.push(1i64);
    stack.push(2);
    println!("{}", stack.pop()?);
    println!("{}", stack.pop()?);
    println!("{}", stack.pop_or(0));

    match stack.pop() {
        Ok(value) => println!("{}", value),
        Err(e) => println!("{}", e),
    }

    info!("walk-through complete");
    Ok(())
}

fn tail_of(xs: &Cons<i64>) -> eyre::Result<Cons<i64>> {
    xs.tail().ok_or_else(|| eyre!("list has no tail"))
}
