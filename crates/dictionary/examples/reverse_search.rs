/// Builds the reverse index and searches it by CSS or description text.
///
/// ```bash
/// cargo run --example reverse_search -p twgloss-dictionary -- "letter spacing"
/// ```
use twgloss_dictionary::{ReverseIndex, Translator, TranslatorOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "rotate".to_string());

    let translator = Translator::new().with_options(TranslatorOptions {
        max_search_results: Some(20),
        ..TranslatorOptions::default()
    });
    let index = ReverseIndex::build(&translator);
    println!("{} classes indexed ({})\n", index.len(), index.fingerprint());

    let results = index.search(&term);
    if results.is_empty() {
        println!("No classes match {:?}", term);
        return;
    }
    for item in results {
        println!("{:<28} {:<40} {}", item.class_name, item.css_preview(), item.description);
    }
}
