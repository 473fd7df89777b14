use clap::Parser;
use ratequote::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
