//! `mocat`: a small CLI for inspecting and querying `.mo` catalogs, gated
//! behind the `cli` feature as a thin, optional binary over the library.

use clap::{Parser, Subcommand};
use mocat::Catalog;

#[derive(Parser)]
#[command(name = "mocat", version, about = "Inspect and query GNU gettext .mo catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print header fields, string count, and the active search method.
    Inspect { file: String },
    /// Look up a single message id.
    Query { file: String, msgid: String },
    /// Run every original string through `translate` once and print stats.
    Stats { file: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { file } => inspect(&file),
        Command::Query { file, msgid } => query(&file, &msgid),
        Command::Stats { file } => stats(&file),
    }
}

fn inspect(file: &str) -> anyhow::Result<()> {
    let catalog = Catalog::open_file(file)?;
    println!("file: {file}");
    println!("string count: {}", catalog.string_count());
    println!("search method: {}", catalog.search_method());
    Ok(())
}

fn query(file: &str, msgid: &str) -> anyhow::Result<()> {
    let catalog = Catalog::open_file(file)?;
    let result = catalog.translate(msgid.as_bytes());
    if result == msgid.as_bytes() {
        println!("(untranslated)");
    } else {
        println!("{}", String::from_utf8_lossy(result));
    }
    Ok(())
}

#[cfg(feature = "stats")]
fn stats(file: &str) -> anyhow::Result<()> {
    let catalog = Catalog::open_file(file)?;
    // Touch every original once so the counters reflect a full sweep.
    let originals: Vec<Vec<u8>> = catalog.originals().map(|s| s.to_vec()).collect();
    for original in &originals {
        let _ = catalog.translate(original);
    }
    let snapshot = catalog.stats();
    println!("total_lookups:   {}", snapshot.total_lookups);
    println!("cache_hits:      {}", snapshot.cache_hits);
    println!("cache_misses:    {}", snapshot.cache_misses);
    println!("hash_collisions: {}", snapshot.hash_collisions);
    println!("comparisons:     {}", snapshot.comparisons);
    Ok(())
}

#[cfg(not(feature = "stats"))]
fn stats(file: &str) -> anyhow::Result<()> {
    let _ = Catalog::open_file(file)?;
    println!("this build was compiled without the `stats` feature");
    Ok(())
}
