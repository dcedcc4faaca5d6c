//! Word-Frequency Benchmarking Tool
//!
//! Measures the throughput of the analysis pipeline on a large text file,
//! such as a book from Project Gutenberg or a Wikipedia dump.
//!
//! ## What It Benchmarks
//!
//! 1. **Split**: Delimiter scan only
//! 2. **Clean**: Split + punctuation cleaning of every token
//! 3. **Analyze**: Full `TextAnalysis` construction plus one read of the
//!    alphabetized counts (forces the sort)
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/tally_bench /path/to/book.txt          # all modes
//! ./target/release/tally_bench /path/to/book.txt clean    # one mode
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Analyze ===
//! --------------------------------
//! Mode        : Analyze
//! Elapsed     : 0.212 s
//! Throughput  : 0.427 GiB/s
//! Words       : 17_436_112
//! Words/sec   : 82_245_811
//! --------------------------------
//! ```
//!
//! Build with `--release`; use an input of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use tally_core::{TextAnalysis, Tokenizer, WordCleaner};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: tally_bench <path> [split|clean|analyze|all]");
        std::process::exit(1);
    }

    let path = &args[1];
    let mode = args.get(2).map(String::as_str).unwrap_or("all");

    println!("Loading file...");
    let input = fs::read_to_string(path)?;

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    match mode {
        "split" => bench_split(&input),
        "clean" => bench_clean(&input),
        "analyze" => bench_analyze(&input),
        "all" => {
            bench_split(&input);
            bench_clean(&input);
            bench_analyze(&input);
        }
        other => {
            eprintln!("Unknown mode: {}", other);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn bench_split(input: &str) {
    let tokenizer = Tokenizer::new();

    println!("=== Split ===");

    let mut tokens = 0u64;
    let elapsed = run(|| {
        let mut local = 0u64;
        tokenizer.split(input, |_t| local += 1);
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Split", "Tokens", input.len(), elapsed, tokens);
}

fn bench_clean(input: &str) {
    let tokenizer = Tokenizer::new();
    let cleaner = WordCleaner::default();
    let mut word = String::with_capacity(64);

    println!("=== Clean ===");

    let mut words = 0u64;
    let elapsed = run(|| {
        let mut local = 0u64;
        tokenizer.split(input, |t| {
            cleaner.clean_into(t, &mut word);
            if !word.is_empty() {
                local += 1;
            }
        });
        words = local;
        std::hint::black_box(words);
    });

    print_perf("Clean", "Words", input.len(), elapsed, words);
}

fn bench_analyze(input: &str) {
    println!("=== Analyze ===");

    let mut words = 0u64;
    let elapsed = run(|| {
        let analysis = TextAnalysis::new(input);
        std::hint::black_box(analysis.unique_word_counts().len());
        words = analysis.total_word_count() as u64;
    });

    print_perf("Analyze", "Words", input.len(), elapsed, words);
}

fn run<F: FnMut()>(mut f: F) -> Duration {
    for _ in 0..WARMUP_RUNS {
        f();
    }

    let mut total = Duration::ZERO;
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, unit: &str, input_bytes: usize, elapsed: Duration, items: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if items > 0 {
        println!("{:<12}: {}", unit, fmt_count(items));
        println!("{:<12}: {}", format!("{}/sec", unit), fmt_count((items as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
