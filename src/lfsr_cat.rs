//! Loads an LFSR device and copies its output to stdout.
//!
//! ```text
//! lfsr_cat --count 1024 --seed 42 | xxd
//! lfsr_cat | RNG_test stdin8
//! ```

use std::{io, process::exit};

use clap::{value_parser, Arg, ArgMatches, Command};
use lfsr::{DeviceError, LfsrConfig, LfsrModule, Registry, DEFAULT_DEVICE_NAME};

/// How much is requested from the device per read when streaming without a limit.
const BUFFER_SIZE: usize = 1024_usize.pow(2);

fn main() {
    let matches = Command::new("lfsr_cat")
        .about("Streams bytes from a 128-bit LFSR device to stdout")
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_name("BYTES")
                .help("Number of bytes to write; streams forever if omitted")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Fixed 64-bit seed; drawn from the OS entropy source if omitted")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .help("Name to register the device under")
                .default_value(DEFAULT_DEVICE_NAME),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log device activity to stderr")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        log::Level::Trace
    } else {
        log::Level::Info
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("lfsr_cat: cannot install logger: {e}");
    }

    if let Err(e) = run(&matches) {
        log::error!("{e}");
        exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), DeviceError> {
    let config = LfsrConfig {
        device_name: matches
            .get_one::<String>("name")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DEVICE_NAME.into()),
        seed: matches.get_one::<u64>("seed").copied(),
    };
    let module = LfsrModule::start(Registry::global(), &config)?;
    let mut handle = module.device().open();
    let mut output = io::stdout().lock();

    let mut remaining = matches.get_one::<u64>("count").copied();
    loop {
        let len = match remaining {
            Some(0) => break,
            Some(count) => count.min(BUFFER_SIZE as u64) as usize,
            None => BUFFER_SIZE,
        };
        match handle.read_to(len, &mut output) {
            Ok(_) => {}
            Err(DeviceError::Delivery { source, .. })
                if source.kind() == io::ErrorKind::BrokenPipe =>
            {
                break;
            }
            Err(e) => return Err(e),
        }
        if let Some(count) = remaining.as_mut() {
            *count -= len as u64;
        }
    }
    Ok(())
}
