mod logging;

use clap::{Parser, ValueEnum};
use route_climber::{
    AncestorMatch, ClimbError, ClimbResult, ClimberConfig, array_from_value, structure_from_value,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// URL, then method, then entry
    #[default]
    Structure,
    /// One fully resolved record per terminal route
    Array,
}

#[derive(Debug, Parser)]
#[command(
    name = "route-climber",
    version,
    about = "Describe every route of a serialized HTTP router",
    long_about = "Reads a JSON dump of a host router or application and prints every \
                  reachable URL with its methods, middleware chain and handler."
)]
struct Cli {
    /// JSON dump of the router, or `-` to read stdin
    #[arg(value_name = "DUMP")]
    dump: PathBuf,

    /// Output form
    #[arg(short, long, value_enum, default_value_t = Format::Structure)]
    format: Format,

    /// Path every URL is prefixed with
    #[arg(short, long, value_name = "PATH")]
    base: Option<String>,

    /// JSON file holding an extraction config
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only inherit middleware from whole-segment ancestors
    #[arg(long)]
    segment_prefix: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    /// Config file first, then flags on top.
    fn climber_config(&self) -> ClimbResult<ClimberConfig> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => ClimberConfig::default(),
        };
        if let Some(base) = &self.base {
            config = config.with_base_path(base.clone());
        }
        if self.segment_prefix {
            config = config.with_ancestor_match(AncestorMatch::SegmentPrefix);
        }
        Ok(config)
    }
}

fn read_dump(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn run(cli: &Cli, dump: &str) -> ClimbResult<String> {
    let config = cli.climber_config()?;
    let value: serde_json::Value = serde_json::from_str(dump)?;
    let output = match cli.format {
        Format::Structure => render(&structure_from_value(&value, &config)?, cli.pretty)?,
        Format::Array => render(&array_from_value(&value, &config)?, cli.pretty)?,
    };
    Ok(output)
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();

    tracing::debug!(dump = %cli.dump.display(), format = ?cli.format, "extracting routes");
    let result = read_dump(&cli.dump)
        .map_err(ClimbError::from)
        .and_then(|dump| run(&cli, &dump));

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("route-climber: {}", err);
            ExitCode::FAILURE
        }
    }
}
