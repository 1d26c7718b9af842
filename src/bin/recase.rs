// Recase Launcher
// Lists every candidate as JSON, or pipes one transformation by name.
//
// Every argument after the program name is launcher data: `recase INPUT`
// or `recase INPUT NAME`, taken verbatim. Options live in the environment
// (`RECASE_CONFIG`, `RECASE_LOG`); admin tasks live in `recase-ctl`.

use std::io::{self, Write};

#[cfg(feature = "cli")]
use recase_core::{Dispatcher, Invocation, Output, Settings};

/// Log filter variable, in `env_logger` syntax (`debug`, `recase_core=trace`)
#[cfg(feature = "cli")]
const LOG_ENV: &str = "RECASE_LOG";

#[cfg(feature = "cli")]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Items go out as one JSON line; named output goes out raw, unterminated
#[cfg(feature = "cli")]
fn write_output<W: Write>(output: &Output, out: &mut W) -> io::Result<()> {
    match output {
        Output::Items(items) => writeln!(out, "{}", items.to_json()?)?,
        Output::Text(text) => write!(out, "{}", text)?,
    }
    out.flush()
}

/// Validate `args` (program name excluded) and write the result to `out`
#[cfg(feature = "cli")]
fn launch<S: AsRef<str>, W: Write>(
    dispatcher: &Dispatcher,
    args: &[S],
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let invocation = Invocation::from_args(args)?;
    let output = dispatcher.run(&invocation)?;
    write_output(&output, out)?;
    Ok(())
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    log::debug!("Launcher arguments: {:?}", args);

    let settings = Settings::load_from_env()?;
    let dispatcher = settings.dispatcher()?;

    let mut stdout = io::stdout().lock();
    launch(&dispatcher, args.as_slice(), &mut stdout)
}

// Stub for when cli feature is not enabled
#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("Error: recase binary requires the 'cli' feature to be enabled.");
    eprintln!("Please build with: cargo build --release --features cli --bin recase");
    std::process::exit(1);
}
