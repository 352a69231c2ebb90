use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use classifier::{classify, nearest, search, stats, ClassifyOptions};
use songsim_core::{NormalizerKind, DEFAULT_SENTINEL};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "classifier")]
#[command(about = "Guess a song's genre from its nearest TF-IDF neighbour", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the category of the song most similar to the query
    Classify {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[command(flatten)]
        query: QueryArgs,
        /// Print the matched song and score as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the k most similar songs
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[command(flatten)]
        query: QueryArgs,
        #[arg(short, default_value_t = 10)]
        k: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Summarize the corpus
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Args)]
struct CorpusArgs {
    /// CSV file, or a directory of CSV files
    #[arg(long)]
    input: PathBuf,
    /// Category value marking unlabeled songs
    #[arg(long, env = "SONGSIM_SENTINEL", default_value = DEFAULT_SENTINEL)]
    sentinel: String,
    /// Input files have no header row
    #[arg(long, default_value_t = false)]
    no_headers: bool,
    #[arg(long, env = "SONGSIM_NORMALIZER", value_enum, default_value_t = NormalizerArg::Ascii)]
    normalizer: NormalizerArg,
}

impl CorpusArgs {
    fn options(&self) -> ClassifyOptions {
        ClassifyOptions {
            sentinel: self.sentinel.clone(),
            has_headers: !self.no_headers,
            normalizer: self.normalizer.into(),
        }
    }
}

#[derive(Args)]
struct QueryArgs {
    /// Query lyrics
    #[arg(long, conflicts_with = "query_file", required_unless_present = "query_file")]
    query: Option<String>,
    /// Read the query lyrics from a file
    #[arg(long)]
    query_file: Option<PathBuf>,
}

impl QueryArgs {
    fn text(&self) -> Result<String> {
        match (&self.query, &self.query_file) {
            (Some(q), _) => Ok(q.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("reading query from {}", path.display())),
            (None, None) => anyhow::bail!("either --query or --query-file is required"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NormalizerArg {
    /// Keep [a-z0-9_] only
    Ascii,
    /// NFKC and keep Unicode word characters
    Unicode,
}

impl From<NormalizerArg> for NormalizerKind {
    fn from(arg: NormalizerArg) -> Self {
        match arg {
            NormalizerArg::Ascii => Self::Ascii,
            NormalizerArg::Unicode => Self::Unicode,
        }
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { corpus, query, json } => {
            let opts = corpus.options();
            let text = query.text()?;
            if json {
                let hit = nearest(&corpus.input, &text, &opts)?;
                println!("{}", serde_json::to_string_pretty(&hit)?);
            } else {
                println!("{}", classify(&corpus.input, &text, &opts)?);
            }
        }
        Commands::Search { corpus, query, k, json } => {
            let hits = search(&corpus.input, &query.text()?, k, &corpus.options())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                for hit in hits {
                    println!("{:.4}\t{}\t{} - {} ({})", hit.similarity, hit.category, hit.artist, hit.title, hit.year);
                }
            }
        }
        Commands::Stats { corpus, json } => {
            let s = stats(&corpus.input, &corpus.options())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&s)?);
            } else {
                println!("documents:    {}", s.num_docs);
                println!("skipped:      {}", s.skipped);
                println!("vocabulary:   {}", s.vocabulary);
                println!("total tokens: {}", s.total_tokens);
            }
        }
    }
    Ok(())
}
