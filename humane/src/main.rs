use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod context;
mod format;

/// humane - human-readable numbers and relative times
///
/// Groups digits of large numbers and describes the distance between
/// instants in coarse phrases like "3w ago".
#[derive(Parser, Debug)]
#[command(name = "humane")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// Group the digits of a number with thousands separators
    Comma {
        /// Integer of any size, or a float (truncated toward zero)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Describe an instant relative to now
    Age {
        /// RFC 3339 timestamp, Unix seconds (@-prefixed when negative) or "now"
        instant: String,
        /// Label for instants in the past
        #[arg(long)]
        past: Option<String>,
        /// Label for instants in the future
        #[arg(long)]
        future: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Describe one instant relative to another
    Rel {
        /// Instant to describe
        instant: String,
        /// Reference instant (defaults to now)
        reference: Option<String>,
        /// Label used when the instant is at or before the reference
        #[arg(long)]
        past: Option<String>,
        /// Label used when the instant is after the reference
        #[arg(long)]
        future: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Format a byte count
    Size {
        /// Number of bytes
        bytes: u64,
        /// Use decimal units (kB, MB) instead of binary (KiB, MiB)
        #[arg(long)]
        decimal: bool,
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Show the relative time magnitude table
    Table {
        /// Output format: pretty, json, yaml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    context::init_logging(verbosity);

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(format::ColorChoice::from(cli.color.as_str()), verbosity);
    log::debug!("verbosity {:?}, color {}", ctx.verbosity, ctx.color);

    match cli.command {
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Comma { value, format } => {
            let fmt = format::resolve_format(&ctx, format.as_deref());
            commands::comma::handle_comma(&ctx, &value, fmt);
        }
        Commands::Age {
            instant,
            past,
            future,
            format,
        } => {
            let ctx = ctx.with_labels(past.as_deref(), future.as_deref());
            let fmt = format::resolve_format(&ctx, format.as_deref());
            commands::time::handle_age(&ctx, &instant, fmt);
        }
        Commands::Rel {
            instant,
            reference,
            past,
            future,
            format,
        } => {
            let ctx = ctx.with_labels(past.as_deref(), future.as_deref());
            let fmt = format::resolve_format(&ctx, format.as_deref());
            commands::time::handle_rel(&ctx, &instant, reference.as_deref(), fmt);
        }
        Commands::Size {
            bytes,
            decimal,
            format,
        } => {
            let fmt = format::resolve_format(&ctx, format.as_deref());
            commands::size::handle_size(&ctx, bytes, decimal, fmt);
        }
        Commands::Table { format } => {
            let fmt = format::resolve_format(&ctx, format.as_deref());
            commands::table::handle_table(&ctx, fmt);
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}
