use rs2_lazy::prelude::*;

fn main() {
    env_logger::init();

    let squares = infinite(|i| (i as u64) * (i as u64));

    // Infinite streams must be bounded before they are drained
    let first: Vec<u64> = squares.clone().filter(|x| x % 2 == 1).iter().take(5).collect();
    println!("First odd squares: {:?}", first);

    // Resetting restarts the generator at index 0
    let mut e = squares.enumerator();
    e.move_next();
    e.move_next();
    e.reset();
    println!("After reset: {:?}", e.move_next());

    // A bounded drain reports instead of running forever
    let config = BufferConfig::default().with_max_capacity(1_000);
    match squares.to_array_with(&config) {
        Ok(items) => println!("Drained {} items", items.len()),
        Err(e) => println!("Stopped: {}", e),
    }
}
