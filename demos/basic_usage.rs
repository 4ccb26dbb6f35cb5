use rs2_lazy::prelude::*;

fn main() {
    env_logger::init();

    // Create a stream over an array
    let stream = from_array(vec![1, 2, 3, 4, 5, 6]);

    // Apply transformations
    let result = stream
        .clone()
        .filter(|x| x % 2 == 0) // Keep only even numbers
        .map(|x| x * 3) // Triple each number
        .to_array(); // Drain into a Vec

    println!("Result: {:?}", result); // Output: Result: [6, 12, 18]

    // The source is untouched and can be drained again
    println!("Source: {:?}", stream.to_array());

    let one = singleton("only").to_array();
    println!("Singleton: {:?}", one);
}
