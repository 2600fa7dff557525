use std::process;

fn main() {
    if let Err(e) = cmdln::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
