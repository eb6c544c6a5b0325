use std::error::Error as _;
use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use btac::{reverse_file_to_stream, stdin_file, Options, Stdout};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        let mut msg = format!("btac: {}", e);
        let mut cause = e.source();
        while let Some(c) = cause {
            msg.push_str(&format!(": {}", c));
            cause = c.source();
        }
        eprintln!("{}", msg);
        process::exit(1);
    }
}

fn run() -> btac::Result<()> {
    let input = stdin_file()?;
    let mut output = Stdout::new()?;
    reverse_file_to_stream(&input, &mut output, &Options::default())?;
    output.flush()
}
