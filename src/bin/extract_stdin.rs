//! Simple CLI that reads HTML from stdin and writes the extracted
//! article to stdout. Pass `--text` for plain text instead of HTML.

use std::io::{self, Read};

use coreex::extract_bytes;

fn main() {
    let as_text = std::env::args().any(|arg| arg == "--text");

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    match extract_bytes(&html) {
        Ok(result) => {
            if as_text {
                println!("{}", result.content_text);
            } else {
                println!("{}", result.content_html);
            }
        }
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            std::process::exit(1);
        }
    }
}
