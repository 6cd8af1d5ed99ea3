use std::io::{self, BufRead, BufWriter, Write};
use std::process::exit;

use clap::Parser;
use lazy_split::{SplitMode, Splitter};
use log::{debug, error};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Splits hierarchical names (e.g. `refs/heads/main`) on a single character.
#[derive(Parser, Debug)]
#[clap(name = "refsplit", version)]
struct Args {
    /// Names to split. Read one per line from stdin when none are given.
    #[clap()]
    inputs: Vec<String>,

    #[clap(short, long, default_value = "/")]
    delimiter: char,

    /// Drop empty tokens
    #[clap(short, long)]
    remove_empty: bool,

    /// Print only the last token of each name
    #[clap(short, long)]
    last: bool,
}

impl Args {
    fn mode(&self) -> SplitMode {
        if self.remove_empty {
            SplitMode::RemoveEmpty
        } else {
            SplitMode::Keep
        }
    }
}

fn write_tokens<W: Write>(out: &mut W, name: &str, args: &Args) -> io::Result<()> {
    let splitter = Splitter::new(name, args.delimiter, args.mode());

    if args.last {
        // RemoveEmpty can leave nothing at all; print an empty line for it.
        let last = splitter.iter().last().unwrap_or_default();
        return writeln!(out, "{}", last);
    }

    let mut count = 0;
    for token in splitter {
        writeln!(out, "{}", token)?;
        count += 1;
    }
    debug!("{:?}: {} tokens", name, count);
    Ok(())
}

fn run(args: &Args) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.inputs.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            write_tokens(&mut out, line.trim_end_matches('\r'), args)?;
        }
    } else {
        for name in &args.inputs {
            write_tokens(&mut out, name, args)?;
        }
    }

    out.flush()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        // A closed pipe (`refsplit ... | head`) is not worth reporting.
        if e.kind() != io::ErrorKind::BrokenPipe {
            error!("{}", e);
            exit(1);
        }
    }
}
