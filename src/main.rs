use std::{env, path::PathBuf};

mod logging;

fn get_output_dir() -> PathBuf {
    match env::args().nth(1) {
        None => PathBuf::from("."),
        Some(dir) => PathBuf::from(dir),
    }
}

fn main() {
    logging::setup_logging();

    let catalog = films2html::Catalog::sample();
    films2html::run(&catalog, &get_output_dir());
}
