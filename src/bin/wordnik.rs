//! Wordnik CLI binary.
//!
//! A command-line interface for the Wordnik dictionary API.

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;
use wordnik::cli::{Cli, Command};
use wordnik::output::{to_json, PrettyPrint};
use wordnik::{List, WordList, WordnikClient};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match WordnikClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set WORDNIK_API_KEY environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &WordnikClient, cli: Cli) -> wordnik::Result<()> {
    let options = cli.command.query_options();
    let json = cli.json;

    match cli.command {
        Command::Word { word, .. } => {
            let result = client.word(&word, &options).await?;
            output_pretty(&result, json)?;
        }
        Command::Definitions { word, .. } => {
            let defs = client.definitions(&word, &options).await?;
            output_pretty(defs.as_slice(), json)?;
        }
        Command::Examples { word, .. } => {
            let results = client.examples(&word, &options).await?;
            output_rows(&results.examples, json, |e| ExampleRow::from(e))?;
        }
        Command::Related { word, .. } => {
            let related = client.related_words(&word, &options).await?;
            output_rows(&related, json, |r| RelatedRow::from(r))?;
        }
        Command::Pronunciations { word, .. } => {
            let prons = client.pronunciations(&word, &options).await?;
            output_rows(&prons, json, |p| PronunciationRow::from(p))?;
        }
        Command::Search { query, .. } => {
            let results = client.search_words(&query, &options).await?;
            output_rows(&results.search_results, json, |r| SearchRow::from(r))?;
            if !json {
                println!("\n{} total results", results.total_results);
            }
        }
        Command::Reverse { query, .. } => {
            let results = client.reverse_dictionary(&query, &options).await?;
            output_pretty(results.results.as_slice(), json)?;
        }
        Command::Random { .. } => {
            let word = client.random_word(&options).await?;
            output_pretty(&word, json)?;
        }
        Command::Wotd { date } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let wotd = client.word_of_the_day(date).await?;
            output_pretty(&wotd, json)?;
        }
        Command::Lists { auth_token } => {
            let lists = WordList::list_all(client, &auth_token).await?;
            output_rows(&lists, json, |l| ListRow::from(l))?;
        }
    }
    Ok(())
}

fn output_pretty<T: PrettyPrint + Serialize + ?Sized>(item: &T, json: bool) -> wordnik::Result<()> {
    if json {
        println!("{}", to_json(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_rows<T, R, F>(items: &[T], json: bool, to_row: F) -> wordnik::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", to_json(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct ExampleRow {
    year: String,
    title: String,
    text: String,
}

impl From<&wordnik::Example> for ExampleRow {
    fn from(e: &wordnik::Example) -> Self {
        Self {
            year: e.year.map(|y| y.to_string()).unwrap_or_default(),
            title: e.title.clone().unwrap_or_default(),
            text: e.text.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct RelatedRow {
    relationship: String,
    words: String,
}

impl From<&wordnik::RelatedWord> for RelatedRow {
    fn from(r: &wordnik::RelatedWord) -> Self {
        Self {
            relationship: r.relationship_type.clone(),
            words: r.words.join(", "),
        }
    }
}

#[derive(Tabled)]
struct PronunciationRow {
    format: String,
    pronunciation: String,
}

impl From<&wordnik::TextPron> for PronunciationRow {
    fn from(p: &wordnik::TextPron) -> Self {
        Self {
            format: p.raw_type.clone().unwrap_or_default(),
            pronunciation: p.raw.clone(),
        }
    }
}

#[derive(Tabled)]
struct SearchRow {
    word: String,
    count: i64,
    lexicality: f64,
}

impl From<&wordnik::WordSearchResult> for SearchRow {
    fn from(r: &wordnik::WordSearchResult) -> Self {
        Self {
            word: r.word.clone(),
            count: r.count,
            lexicality: r.lexicality,
        }
    }
}

#[derive(Tabled)]
struct ListRow {
    permalink: String,
    name: String,
    #[tabled(rename = "type")]
    list_type: String,
    words: i64,
}

impl From<&WordList> for ListRow {
    fn from(l: &WordList) -> Self {
        Self {
            permalink: l.permalink.clone().unwrap_or_default(),
            name: l.name.clone().unwrap_or_default(),
            list_type: l.list_type.clone().unwrap_or_default(),
            words: l.number_words_in_list,
        }
    }
}
