use algodeck::filter::SortOption;
use algodeck::model::{Classification, Difficulty};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "algodeck",
    bin_name = "algodeck",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Browse algorithm and data-structure reference cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (default: $ALGODECK_DATA, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cards, filtered, sorted and paginated
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Show one card in full
    #[command(alias = "view", display_order = 2)]
    Show { id: String },

    /// List the tags in use
    #[command(display_order = 3)]
    Tags,

    /// Create the deck and seed the built-in cards
    #[command(display_order = 10)]
    Init,

    /// Import cards from a JSON file
    #[command(display_order = 11)]
    Import {
        file: PathBuf,

        /// Replace cards whose id already exists
        #[arg(long)]
        replace: bool,
    },

    /// Delete a card
    #[command(alias = "rm", display_order = 12)]
    Delete { id: String },

    /// Show or change browsing defaults
    #[command(display_order = 20)]
    Config {
        /// Config key (items-per-page, sort-by)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Only these classifications (repeatable)
    #[arg(long = "class", value_enum, value_name = "CLASS")]
    pub classes: Vec<ClassArg>,

    /// Only these difficulties (repeatable)
    #[arg(short, long, value_enum)]
    pub difficulty: Vec<DifficultyArg>,

    /// Only cards with any of these tags (repeatable)
    #[arg(short, long)]
    pub tag: Vec<String>,

    /// Case-insensitive text search over title, explanation, code and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (default from config)
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Page to show, starting at 1
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Cards per page: 6, 12, 24 or 48
    #[arg(long)]
    pub per_page: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    Sorts,
    Searches,
    Algorithms,
    Heuristics,
    Patterns,
    DataStructures,
}

impl From<ClassArg> for Classification {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Sorts => Classification::Sorts,
            ClassArg::Searches => Classification::Searches,
            ClassArg::Algorithms => Classification::Algorithms,
            ClassArg::Heuristics => Classification::Heuristics,
            ClassArg::Patterns => Classification::Patterns,
            ClassArg::DataStructures => Classification::DataStructures,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Alphabetical,
    Difficulty,
    Date,
    Classification,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Alphabetical => SortOption::Alphabetical,
            SortArg::Difficulty => SortOption::Difficulty,
            SortArg::Date => SortOption::Date,
            SortArg::Classification => SortOption::Classification,
        }
    }
}
