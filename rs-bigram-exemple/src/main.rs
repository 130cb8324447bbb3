use rs_bigram_core::{Mode, TransitionMatrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows the pass statistics and cache activity
    env_logger::init();

    // Word list, one word per line, accents as combining marks (NFD)
    let corpus = "./data/french.dat";

    for mode in [Mode::Complete, Mode::Simple] {
        // Loads ./data/french.<mode>.bin if it exists, otherwise builds and writes it
        let matrix = TransitionMatrix::load_or_create(corpus, mode)?;
        log::info!("{} matrix loaded", mode.name());

        // Rows and columns are labelled by the alphabet, 'start' first and 'end' last
        println!("{} alphabet ({} symbols):", mode.name(), matrix.dimension());
        println!("  {}", matrix.alphabet().symbols().join(" "));

        // Most likely successors of a few symbols, in percent
        for symbol in ["start", "a", "e", "q"] {
            match matrix.successors(symbol) {
                Ok(successors) => {
                    let top: Vec<String> = successors
                        .iter()
                        .take(5)
                        .map(|(next, percentage)| format!("{next}={percentage:.2}%"))
                        .collect();
                    println!("  {symbol} -> {}", top.join(", "));
                }
                Err(_) => println!("  {symbol} is not in this corpus"),
            }
        }
    }

    Ok(())
}
