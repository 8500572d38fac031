//! Basic example demonstrating the Wordnik API client.
//!
//! Run with:
//! ```
//! WORDNIK_API_KEY=your-key cargo run --example basic
//! ```

use wordnik::{QueryOption, WordnikClient};

#[tokio::main]
async fn main() -> wordnik::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Wordnik client...");
    let client = WordnikClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Look up a plural and let the API canonicalize it
    println!("\n--- Word Lookup ---");
    let word = client
        .word("cats", &[QueryOption::use_canonical(true)])
        .await?;
    println!(
        "{} -> {}",
        word.original_word.as_deref().unwrap_or(&word.word),
        word.canonical_form.as_deref().unwrap_or(&word.word)
    );

    // Noun definitions from every dictionary
    println!("\n--- Definitions ---");
    let definitions = client
        .definitions(
            "potato",
            &[
                QueryOption::source_dictionaries(&["all"]),
                QueryOption::part_of_speech(&["noun"]),
                QueryOption::limit(5),
            ],
        )
        .await?;
    for (i, def) in definitions.iter().filter(|d| d.has_text()).enumerate() {
        let source = def.source_dictionary.as_deref().unwrap_or("unknown");
        println!("  {}. [{}] {}", i + 1, source, def.text.as_deref().unwrap_or_default());
    }

    // Synonyms only
    println!("\n--- Synonyms ---");
    let related = client
        .related_words(
            "happy",
            &[
                QueryOption::relationship_types(&["synonym"]),
                QueryOption::limit_relationship_type(5),
            ],
        )
        .await?;
    for group in &related {
        println!("  {}: {}", group.relationship_type, group.words.join(", "));
    }

    // Reverse dictionary
    println!("\n--- Reverse Dictionary ---");
    let results = client
        .reverse_dictionary("a young dog", &[QueryOption::limit(5)])
        .await?;
    println!("Found {} matches", results.total_results);
    for def in &results.results {
        println!("  - {}", def.word);
    }

    // Today's word
    println!("\n--- Word of the Day ---");
    let wotd = client
        .word_of_the_day(chrono::Local::now().date_naive())
        .await?;
    println!("  {}", wotd.word);

    // API key usage
    let status = client.api_token_status().await?;
    println!("\nRemaining calls: {}", status.remaining_calls);

    println!("\nDone!");
    Ok(())
}
