use clap::Parser;
use cli::{Cli, CliAlgorithm, CliCommands, ExistsCommand, SearchCommand};
use dna_ngram_search::{
    error::Result, Alphabet, Matcher, NGramIndex, Naive, PrefixFunctionSearch, SeedExtendIndex,
    SlidingWindow, SubstringSearch,
};
use log::warn;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod cli;

fn main() {
    let cli = Cli::parse();

    TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|error| eprintln!("logger initialisation failed: {error}"));

    match cli.command {
        CliCommands::Exists(exists_command) => exists(exists_command),
        CliCommands::Search(search_command) => search(search_command),
        CliCommands::Demo => demo(),
    }
    .unwrap_or_else(|error| println!("Error: {error}"));
}

fn exists(exists_command: ExistsCommand) -> Result<()> {
    let alphabet = Alphabet::new();
    let matcher = Matcher::new(&alphabet);

    if !matcher.is_valid_sequence(&exists_command.sequence) {
        warn!(
            "sequence {:?} contains characters outside ACGT and cannot fully match",
            exists_command.sequence,
        );
    }
    if !matcher.is_valid_pattern(&exists_command.pattern) {
        warn!(
            "pattern {:?} contains unrecognised IUPAC codes and cannot fully match",
            exists_command.pattern,
        );
    }

    let found = match exists_command.algorithm {
        CliAlgorithm::Naive => {
            Naive::new(matcher).exists(&exists_command.sequence, &exists_command.pattern)
        }
        CliAlgorithm::PrefixFunction => PrefixFunctionSearch::new(matcher)
            .exists(&exists_command.sequence, &exists_command.pattern),
        CliAlgorithm::SlidingWindow => {
            SlidingWindow::new(matcher).exists(&exists_command.sequence, &exists_command.pattern)
        }
    };
    println!("{found}");

    Ok(())
}

fn search(search_command: SearchCommand) -> Result<()> {
    let alphabet = Alphabet::new();
    let index = NGramIndex::new(&alphabet, search_command.sequences, search_command.n)?;

    let results = index.search(&search_command.pattern);
    if results.is_empty() {
        println!("no matching sequences");
    } else {
        for sequence in results {
            println!("{sequence}");
        }
    }

    Ok(())
}

fn demo() -> Result<()> {
    let alphabet = Alphabet::new();
    let matcher = Matcher::new(&alphabet);

    // N-gram index over the classic pair of sequences.
    let index = NGramIndex::new(&alphabet, ["GATTACA", "GATTG"], 4)?;
    println!("=== {}-gram index ===", index.n());
    for key in index.ngram_keys() {
        let key = String::from_utf8_lossy(key);
        println!("{key} -> {:?}", index.posting_list(&key));
    }

    println!("\n=== index queries ===");
    for (pattern, description) in [
        ("GATT", "exact match at the beginning"),
        ("ATTACA", "exact match in the middle"),
        ("GATTR", "R = A|G matches the fifth base of both sequences"),
        ("GATTM", "M = A|C rules out GATTG"),
        ("GATTRR", "no sequence continues with two purines"),
    ] {
        println!("{pattern}: {:?} ({description})", index.search(pattern));
    }

    // Every 4-gram of GATTA occurs in ATTAGATT, but never contiguously at
    // one offset; only verification keeps the result empty.
    println!("\n=== false positive probe ===");
    let probe = NGramIndex::new(&alphabet, ["ATTAGATT"], 4)?;
    println!(
        "candidates for GATT: {:?}, matches for GATTA: {:?}",
        probe.posting_list("GATT"),
        probe.search("GATTA"),
    );

    println!("\n=== algorithm comparison ===");
    let naive = Naive::new(matcher);
    let prefix_function = PrefixFunctionSearch::new(matcher);
    let sliding_window = SlidingWindow::new(matcher);
    for (sequence, pattern) in [
        ("GATTACA", "GATTR"),
        ("GATTG", "GATTR"),
        ("AAAAAAAT", "AAAA"),
        ("ACTA", "RNA"),
    ] {
        println!(
            "{sequence} / {pattern}: naive = {}, prefix-function = {}, sliding-window = {}",
            naive.exists(sequence, pattern),
            prefix_function.exists(sequence, pattern),
            sliding_window.exists(sequence, pattern),
        );
    }

    println!("\n=== seed and extend ===");
    let mut engine = SeedExtendIndex::new(&alphabet, 3)?;
    engine.add_sequence("seq1", "GATTACATTAGC");
    engine.add_sequence("seq2", "CCGATTAGGATT");
    engine.add_sequence("seq3", "TTTTATTGCCCC");
    for query in ["ATTR", "ATYN", "GATTR", "NNNN", "ATTW"] {
        println!("{query}: {:?}", engine.search(query));
    }

    Ok(())
}
