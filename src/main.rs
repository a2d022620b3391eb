use std::{io, process};

use clap::Command;
use log::error;

const WORDS_PATH: &str = "../words-utf8.txt";

fn cli() -> Command {
    Command::new("anagrams")
        .version(env!("CARGO_PKG_VERSION"))
        .about(format!("Prints groups of anagrams found in {}", WORDS_PATH))
}

fn main() {
    env_logger::init();
    let _matches = cli().get_matches();

    let stdout = io::stdout();
    if let Err(err) = anagrams::list_anagrams(WORDS_PATH, &mut stdout.lock()) {
        error!("could not list anagrams from {}: {}", WORDS_PATH, err);
        process::exit(1);
    }
}
