use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use astgen::lox::{DEFINITIONS, Definition};
use log::LevelFilter;

// sysexits.h
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

#[derive(argh::FromArgs)]
/// Generate the Lox syntax tree node types.
struct Args {
    /// don't write anything, fail if a generated file is missing or out of date
    #[argh(switch)]
    check: bool,

    /// log every file that is written or checked
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// directory to write `expr.rs` and `stmt.rs` into
    #[argh(positional)]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    init_logging(if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    });

    ExitCode::from(exit_code(&args, DEFINITIONS))
}

fn exit_code(args: &Args, defs: &[Definition]) -> u8 {
    let Some(output_dir) = &args.output_dir else {
        eprintln!("Usage: astgen <output-dir>");
        return EX_USAGE;
    };

    match run(defs, output_dir, args.check) {
        Ok(Outcome::Done) => 0,
        Ok(Outcome::Stale) => 1,
        Ok(Outcome::InvalidTable) => EX_DATAERR,
        Err(err) => {
            log::error!("{err:#}");
            EX_IOERR
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    Stale,
    InvalidTable,
}

fn run(defs: &[Definition], output_dir: &Path, check: bool) -> anyhow::Result<Outcome> {
    if !check {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create {}", output_dir.display()))?;
    }

    let mut invalid = false;
    let mut stale = false;
    for def in defs {
        // a category that fails to generate leaves its file untouched,
        // the others are still written
        let Some(source) = generate(def) else {
            invalid = true;
            continue;
        };

        let path = output_dir.join(def.file_name());
        if check {
            stale |= !is_up_to_date(&path, &source)?;
        } else {
            fs::write(&path, source)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
    }

    Ok(if invalid {
        Outcome::InvalidTable
    } else if stale {
        Outcome::Stale
    } else {
        Outcome::Done
    })
}

fn generate(def: &Definition) -> Option<String> {
    match def.generate() {
        Ok(source) => Some(source),
        Err(err) => {
            log::error!("failed to generate `{}`: {err}", def.base_name);
            None
        }
    }
}

fn is_up_to_date(path: &Path, source: &str) -> anyhow::Result<bool> {
    if !path.exists() {
        log::warn!("{} is missing", path.display());
        return Ok(false);
    }

    let existing =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    if existing == source {
        log::info!("{} is up to date", path.display());
        Ok(true)
    } else {
        log::warn!("{} is out of date", path.display());
        Ok(false)
    }
}

/// `<level>  /path/to/file:<line>  <time>  <message>`
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            let location = format!(
                "{}:{}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0)
            );
            let now = jiff::Zoned::now();
            let time = now.strftime("%H:%M:%S");
            writeln!(
                buf,
                "{:7}{:45} {time} {}",
                record.level(),
                location,
                record.args()
            )
        })
        .init();
}
