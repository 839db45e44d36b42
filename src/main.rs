//! worddoc: demonstration of the in-memory document model

use tracing_subscriber::EnvFilter;

use worddoc::Document;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting worddoc demonstration");

    let words = vec!["Hello".to_string()];
    let doc = Document::new(words);

    // Seed a second document from an explicit copy of the first's words
    let mut second = Document::new(doc.words().to_vec());
    second.add_word("world".to_string());

    tracing::info!("First document: {:?}", doc.words());
    tracing::info!("Second document: {:?}", second.words());
}
