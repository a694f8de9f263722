/// Translates a class list and prints the CSS and description of each class.
///
/// ```bash
/// cargo run --example translate_classes -p twgloss-dictionary -- "md:hover:bg-blue-500 -mt-4"
/// ```
use twgloss_dictionary::Translator;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let input = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let input = if input.trim().is_empty() {
        "flex items-center md:hover:bg-blue-500 text-3xl -mt-4 w-1/3 totally-not-a-class".to_string()
    } else {
        input
    };

    let translator = Translator::new();
    for (class, entry) in translator.translate_list(&input) {
        match entry {
            Some(entry) => {
                println!("{}", class);
                for line in entry.css.lines() {
                    println!("    {}", line);
                }
                println!("    -> {}\n", entry.description);
            }
            None => println!("{}\n    (unsupported/unknown)\n", class),
        }
    }
}
