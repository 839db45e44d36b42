//! Document state management

/// Represents a document as an ordered list of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The words in the document, in insertion order
    words: Vec<String>,
}

impl Document {
    /// Create a new document from the given words, taking ownership of them
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Append a word to the end of the document
    pub fn add_word(&mut self, word: String) {
        self.words.push(word);
    }

    /// The words in the document, in order, reflecting every append so far
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
