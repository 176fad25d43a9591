fn main() {
    if let Err(e) = dbscope_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
