use clap::{Parser, ValueEnum};
use jexpand::{
    ExpandError, Expander, JexpandError, LeafPolicy, LengthMode, OptionOverrides,
    resolve_options, validate,
};
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LengthArg {
    Auto,
    Length,
    Expand,
}

impl From<LengthArg> for LengthMode {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Auto => LengthMode::Auto,
            LengthArg::Length => LengthMode::Length,
            LengthArg::Expand => LengthMode::Expand,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LeafArg {
    Always,
    Existing,
}

impl From<LeafArg> for LeafPolicy {
    fn from(arg: LeafArg) -> Self {
        match arg {
            LeafArg::Always => LeafPolicy::Always,
            LeafArg::Existing => LeafPolicy::Existing,
        }
    }
}

/// Expands JSON path expressions into the literal paths they select.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON document to read, or `-` for stdin
    document: String,

    /// Path expressions to expand
    #[arg(required = true)]
    paths: Vec<String>,

    /// JSON file with expansion options
    #[arg(long)]
    config: Option<PathBuf>,

    /// What a trailing `#` over an array produces
    #[arg(long, value_enum)]
    length_mode: Option<LengthArg>,

    /// Numeric tokens needed before `auto` expands a trailing `#`
    #[arg(long)]
    auto_expand_depth: Option<usize>,

    /// Whether terminal fields must exist to be emitted
    #[arg(long, value_enum)]
    leaf: Option<LeafArg>,

    /// Print a JSON array instead of one path per line
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Report path syntax problems on stderr before expanding
    #[arg(long, default_value_t = false)]
    check: bool,
}

impl Args {
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            length_mode: self.length_mode.map(LengthMode::from),
            auto_expand_depth: self.auto_expand_depth,
            leaf_policy: self.leaf.map(LeafPolicy::from),
        }
    }
}

fn read_document(source: &str) -> Result<Vec<u8>, JexpandError> {
    if source == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        Ok(fs::read(source)?)
    }
}

fn main() -> Result<(), JexpandError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = resolve_options(args.config.as_deref(), args.overrides())?;

    if args.check {
        for path in &args.paths {
            if let Err(e) = validate(path) {
                eprintln!("{}: {}", path, e);
            }
        }
    }

    let bytes = read_document(&args.document)?;
    let root: Value = serde_json::from_slice(&bytes).map_err(ExpandError::from)?;
    let paths = Expander::with_options(&root, options).expand_all(&args.paths);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer(&mut out, &paths)?;
        writeln!(out)?;
    } else {
        for path in &paths {
            writeln!(out, "{}", path)?;
        }
    }
    Ok(())
}
