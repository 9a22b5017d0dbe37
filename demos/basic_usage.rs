//! Basic Optional usage example

use optional::{EmptyValueAccess, Optional};

/// A payload that is neither `Default` nor `Clone`.
struct Connection {
    host: String,
    port: u16,
}

fn main() -> Result<(), EmptyValueAccess> {
    println!("Optional Basic Usage Example");
    println!("============================");

    let mut conn = Optional::some(Connection {
        host: String::from("localhost"),
        port: 5432,
    });

    // Non-consuming inspection and callbacks
    println!("Populated: {}", conn.is_some());
    conn.if_some(|c| println!("  Connected to {}:{}", c.host, c.port))
        .if_none(|| println!("  No connection"));
    conn.if_some_mut(|c| c.port += 1);

    // Draining transfer into a second cell
    let mut moved = conn.transfer();
    println!("After transfer:");
    println!("  source populated: {}", conn.is_some());
    println!("  target populated: {}", moved.is_some());

    // Consuming access
    let c = moved.expect("connection was transferred")?;
    println!("  Took {}:{}", c.host, c.port);

    // Reading an empty cell reports an error instead of panicking
    match moved.unwrap() {
        Ok(_) => println!("unexpected value"),
        Err(err) => println!("Empty read: {err}"),
    }

    // Fallback accessors never fail
    let mut retries: Optional<u32> = Optional::none();
    println!("Retries (fallback): {}", retries.unwrap_or(|| 3));
    println!("Retries (default):  {}", retries.unwrap_def(5));

    let mut answer = Optional::some(41);
    let described = answer.match_with(|v| format!("some({})", v + 1), || String::from("none"));
    println!("Matched: {described}");

    // Cloning duplicates; the source keeps its value
    let original = Optional::some(vec![1, 2, 3]);
    let copy = original.clone();
    println!("Clone equal: {}, source kept: {}", copy == original, original.is_some());

    Ok(())
}
