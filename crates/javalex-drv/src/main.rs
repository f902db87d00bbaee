fn main() {
    if let Err(e) = javalex_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
