//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = rescue_cli::run() {
        eprintln!("rescue: {err}");
        std::process::exit(1);
    }
}
