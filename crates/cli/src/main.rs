fn main() {
    if let Err(e) = scipstore_cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
