//! Entrypoint for CLI
use std::{env, error::Error, fs, time::Instant};

use log::{debug, error, info};
use ocho::{prelude::*, IMPL_VERSION};

static USAGE: &str = r#"
usage: ocho CMD [FILE]

commands:
    run     Run the target ROM file headless and print the display

examples:
    ocho run breakout.rom
"#;

/// Cycle budget for a headless run. ROMs end in an infinite
/// jump loop, so running without a bound never returns.
const DEFAULT_STEP_LIMIT: usize = 200_000;

fn run_rom(filepath: impl AsRef<str>) -> OchoResult<()> {
    let rom = fs::read(filepath.as_ref())?;

    let mut vm = OchoVm::new(OchoConf {
        step_limit: Some(DEFAULT_STEP_LIMIT),
    });
    vm.load_rom(rom.as_slice())?;

    debug!("program memory:\n{}", vm.dump_ram(rom.len())?);

    let start = Instant::now();
    let result = vm.execute();
    let end = Instant::now();

    info!(
        "time taken: {}ms",
        end.duration_since(start).as_nanos() as f64 / 1000000.0
    ); // to millis
    println!("{}", vm.dump_display()?);

    if let Err(ref err) = result {
        error!("{err}");
    }
    result?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new().env().init().unwrap();

    match parse_args() {
        Some(Cmd::Run { filepath }) => run_rom(filepath)?,
        None => {
            print_usage();
            // FreeBSD EX_USAGE (64)
            std::process::exit(64)
        }
    }

    Ok(())
}

fn parse_args() -> Option<Cmd> {
    let mut args = env::args().skip(1);
    match args.next() {
        Some(cmd) => match cmd.as_str() {
            "run" => Some(Cmd::Run {
                filepath: consume_arg(args)?,
            }),
            _ => None,
        },
        None => None,
    }
}

/// Consumes the next argument, if it exists.
fn consume_arg(mut args: impl Iterator<Item = String>) -> Option<String> {
    args.next()
}

fn print_usage() {
    println!("Ocho v{IMPL_VERSION}");
    println!("{USAGE}");
}

enum Cmd {
    /// Run file
    Run { filepath: String },
}
