//! Interactive catalog search prompt.
//!
//! Thin front end over the library: loads the catalog and rule file once per
//! session, then reads one query per line and prints the matching cards.
//! All decision logic lives in the library.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cardex::{find_cards, sort_by_name, translate, Catalog, QueryError, SynonymDictionary};

#[derive(Parser)]
#[command(name = "cardex", about = "Free-text search over a card catalog")]
struct Args {
    /// Catalog file: header line, then base-record/tag-line pairs.
    #[arg(long)]
    catalog: PathBuf,

    /// Synonym rule file driving query translation.
    #[arg(long)]
    rules: PathBuf,

    /// Sort results alphabetically by name instead of catalog order.
    #[arg(long)]
    sort: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let catalog = Catalog::load_path(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    let dictionary = SynonymDictionary::load_path(&args.rules)
        .with_context(|| format!("loading rules {}", args.rules.display()))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    loop {
        writeln!(out, "\nWhat properties are you searching for?")?;
        writeln!(
            out,
            "Enter 'help' for suggestions, 'all' to list every card, 'quit' to exit."
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => print_help(&mut out)?,
            "all" => print_all(&mut out, &catalog)?,
            _ => run_query(&mut out, &catalog, &dictionary, line, args.sort)?,
        }
    }

    Ok(())
}

fn run_query(
    out: &mut impl Write,
    catalog: &Catalog,
    dictionary: &SynonymDictionary,
    line: &str,
    sort: bool,
) -> io::Result<()> {
    let query = translate(line, dictionary);

    match find_cards(catalog, &query) {
        Ok(mut cards) => {
            if sort {
                sort_by_name(&mut cards);
            }
            writeln!(out, "\n{} card(s) found:", cards.len())?;
            for card in cards {
                writeln!(
                    out,
                    "#{}: {} ({}, {}, cost {}, {})",
                    card.line_number, card.name, card.card_type, card.color, card.total_cost,
                    card.rarity
                )?;
            }
        }
        Err(QueryError::EmptyQuery) => {
            writeln!(out, "\nNo usable search criteria in that input.")?;
        }
    }

    Ok(())
}

fn print_all(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out)?;
    for card in catalog.cards() {
        writeln!(out, "#{}: {}", card.line_number, card.name)?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\nDescribe the cards you want; the description is translated into search keywords."
    )?;
    writeln!(out, "Suggestions:")?;
    writeln!(
        out,
        "  1) Name a card type, such as 'creature', 'sorcery', or 'instant'"
    )?;
    writeln!(
        out,
        "  2) Name a color: red, blue, green, white, black, or colorless"
    )?;
    writeln!(
        out,
        "  3) Name required abilities, such as 'trample' or 'flying'"
    )?;
    writeln!(
        out,
        "  4) Add 'excludes' followed by properties you do not want"
    )?;
    writeln!(
        out,
        "  5) Queries can also use subtype, rarity, set, artist, or print year"
    )?;
    Ok(())
}
