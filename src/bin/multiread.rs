use std::error::Error;
use std::io::Write;

use multiread::cli::{ReadArgs, SourceArgs, parse_format, parse_nproc};
use multiread::build_table_reader;
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  multiread --input <paths> [--input <paths> ...] [--nproc <n>] [--format <csv|json>]");
    eprintln!();
    eprintln!("Reads every input into a table, stacks them in the order given and");
    eprintln!("writes the result as CSV to stdout.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --input <paths>   Comma-separated source paths; '-' reads stdin");
    eprintln!("  -n, --nproc <n>       Number of worker threads (default 1)");
    eprintln!("  -f, --format <fmt>    Format of every source (default: from extension)");
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let input_ref = reader.add::<SourceArgs>(tag::both('i', "input"));
    let nproc_ref = reader.add::<String>(tag::both('n', "nproc"));
    let format_ref = reader.add::<String>(tag::both('f', "format"));

    let args = reader.parse()?;

    let sources = match input_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("SourceArgs parsing is infallible"),
        None => SourceArgs::default(),
    };

    let nproc = match nproc_ref.get(&args) {
        Some(Ok(v)) => parse_nproc(&v).ok_or_else(|| format!("invalid --nproc value '{v}'"))?,
        _ => 1,
    };

    let format = match format_ref.get(&args) {
        Some(Ok(v)) => Some(parse_format(&v).ok_or_else(|| format!("unknown --format '{v}'"))?),
        _ => None,
    };

    if sources.is_empty() {
        return Err("missing --input".into());
    }

    let read_args = ReadArgs {
        sources,
        nproc,
        format,
        verbose: false,
    };

    let engine = build_table_reader(read_args.to_config())?;
    let table = engine.read(read_args.sources.to_providers())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    table.write_csv(&mut out)?;
    out.flush()?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("multiread error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
