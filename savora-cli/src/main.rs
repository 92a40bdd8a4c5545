//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = savora_cli::run() {
        eprintln!("savora: {err}");
        std::process::exit(1);
    }
}
