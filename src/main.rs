// nbstrip - Clear outputs of IPython notebooks
use clap::Parser;
use nbstrip::cli::{execute_command, Args};

fn main() {
    let args = Args::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
