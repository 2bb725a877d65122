use std::path::PathBuf;
use std::str::FromStr;

use chunkline_splitters::{KeepSeparator, Language, SplitterConfigError};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Recursive, separator-aware text chunking.
#[derive(Parser, Debug)]
#[command(name = "chunkline", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in language presets.
    Languages,
    /// Print the separators of a language preset, most coarse first.
    Separators {
        language: Language,
    },
    /// Load files or directories and print their chunks.
    ///
    /// Inside directories, files whose extension has no loader are skipped.
    /// A file named explicitly must be loadable.
    Split(SplitArgs),
    /// Index a directory in memory and print the chunks closest to a question.
    Query(QueryArgs),
}

/// `auto` picks a preset per file from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageChoice {
    Auto,
    Fixed(Language),
}

impl FromStr for LanguageChoice {
    type Err = SplitterConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("auto") {
            return Ok(LanguageChoice::Auto);
        }
        value.parse().map(LanguageChoice::Fixed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KeepSeparatorArg {
    Discard,
    Start,
    End,
}

impl From<KeepSeparatorArg> for KeepSeparator {
    fn from(value: KeepSeparatorArg) -> Self {
        match value {
            KeepSeparatorArg::Discard => KeepSeparator::Discard,
            KeepSeparatorArg::Start => KeepSeparator::Start,
            KeepSeparatorArg::End => KeepSeparator::End,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per line.
    #[default]
    Json,
    Text,
}

/// Splitter settings. Flags override `CHUNKLINE_*` variables, which override
/// the JSON file given with `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct SplitterArgs {
    /// JSON file holding a splitter config.
    #[arg(long, env = "CHUNKLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum chunk length in characters.
    #[arg(long, env = "CHUNKLINE_CHUNK_SIZE")]
    pub chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks.
    #[arg(long, env = "CHUNKLINE_CHUNK_OVERLAP")]
    pub chunk_overlap: Option<usize>,

    /// Language preset name, or `auto` to pick one per file extension.
    #[arg(long, env = "CHUNKLINE_LANGUAGE")]
    pub language: Option<LanguageChoice>,

    /// Custom separator, repeatable, most coarse first. `\n`, `\t` and `\r`
    /// escapes are understood.
    #[arg(long = "separator", value_name = "SEP")]
    pub separators: Vec<String>,

    #[arg(long, value_enum, env = "CHUNKLINE_KEEP_SEPARATOR")]
    pub keep_separator: Option<KeepSeparatorArg>,

    /// Record each chunk's character offset as `start_index` metadata.
    #[arg(long)]
    pub add_start_index: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Pattern matched against paths inside directory arguments.
    #[arg(long, default_value = "**/*")]
    pub glob: String,

    /// Skip files that fail to load instead of aborting.
    #[arg(long)]
    pub silent_errors: bool,

    /// Detect the charset of files that are not UTF-8.
    #[arg(long)]
    pub autodetect_encoding: bool,

    /// Load directories with a thread pool.
    #[arg(long)]
    pub multithreading: bool,

    #[arg(long)]
    pub include_hidden: bool,
}

impl Default for LoadArgs {
    fn default() -> Self {
        Self {
            glob: "**/*".to_string(),
            silent_errors: false,
            autodetect_encoding: false,
            multithreading: false,
            include_hidden: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Files or directories to split.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub load: LoadArgs,

    #[command(flatten)]
    pub splitter: SplitterArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Directory to index.
    pub dir: PathBuf,

    pub question: String,

    #[arg(long, default_value_t = 4)]
    pub top_k: usize,

    /// Buckets used by the hashing embedder.
    #[arg(long, default_value_t = 512)]
    pub dimension: usize,

    #[command(flatten)]
    pub load: LoadArgs,

    #[command(flatten)]
    pub splitter: SplitterArgs,
}
