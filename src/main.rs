//! Replays a few tape sessions and prints each state.
//!
//! Set `RUST_LOG=trace` to see every tape operation.

use std::io;

use tape::{Config, Tape, TapeError};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build() -> Result<Tape<char>, TapeError> {
    let mut tape = Tape::with_config(Config::checked());
    tape.insert_left('a');
    tape.insert_right('b')?;
    tape.insert_left('c');
    println!("built:    {tape}");
    return Ok(tape);
}

fn walk(tape: &mut Tape<char>) {
    tape.rewind();
    while !tape.at_stop() {
        if let Ok(c) = tape.read() {
            println!("read {c:?} at {}", tape.position());
        }
        tape.step();
    }
    println!("walked:   {tape}");
    if let Err(err) = tape.read() {
        println!("read at stop: {err}");
    }
}

fn main() -> Result<(), TapeError> {
    init_logging();

    let mut tape = build()?;
    let mut copy = tape.copy();
    walk(&mut tape);

    copy.erase()?;
    println!("copy:     {copy}");
    println!("original: {tape}");

    let released = tape.destroy();
    info!(released, "original destroyed");
    let released = copy.destroy();
    info!(released, "copy destroyed");
    return Ok(());
}
