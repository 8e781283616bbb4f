use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lse_core::{make_index, KeywordIndex, LseError, DEFAULT_LIMIT};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a keyword index over a document list and query it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// File listing the documents to index, one filename per line
    #[arg(long)]
    docs: String,
    /// File of noise words, one per line
    #[arg(long)]
    noise: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the corpus and print a summary
    Build {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Print the whole index as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Index the corpus, then list documents matching kw1 OR kw2
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        kw1: String,
        /// Optional second keyword
        #[arg(default_value = "")]
        kw2: String,
        /// Maximum number of documents returned
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, json } => {
            let index = load(&corpus)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&index)?);
            } else {
                print_summary(&index);
            }
            Ok(())
        }
        Commands::Search { corpus, kw1, kw2, limit, json } => {
            if kw1.trim().is_empty() {
                return Err(LseError::MalformedQuery("first keyword is empty".into()).into());
            }
            let index = load(&corpus)?;
            let hits = index.top_k(&kw1, &kw2, limit);
            tracing::info!(%kw1, %kw2, hits = hits.len(), "search complete");
            if json {
                println!("{}", serde_json::to_string(&hits)?);
            } else if hits.is_empty() {
                println!("no matches");
            } else {
                for doc in hits {
                    println!("{doc}");
                }
            }
            Ok(())
        }
    }
}

fn load(corpus: &CorpusArgs) -> Result<KeywordIndex> {
    make_index(&corpus.docs, &corpus.noise)
        .with_context(|| format!("indexing documents listed in {}", corpus.docs))
}

fn print_summary(index: &KeywordIndex) {
    println!("documents: {}", index.document_count());
    println!("keywords:  {}", index.len());
    let mut keywords: Vec<&str> = index.keywords().collect();
    keywords.sort_unstable();
    for kw in keywords {
        let occs: Vec<String> = index
            .occurrences(kw)
            .iter()
            .map(|o| format!("({},{})", o.document, o.frequency))
            .collect();
        println!("{kw} -> {}", occs.join(" "));
    }
}
