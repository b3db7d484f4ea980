/// Structured data scraped from a single recipe page
///
/// The crawl loop treats this record as opaque; it exists to be rendered for
/// the reader as each page completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    /// Author name, e.g. "Jane Doe"
    pub author: String,

    /// Full recipe title
    pub title: String,

    /// Deduplicated metadata lines: level, times, yield, nutrition pairs
    pub info: Vec<String>,

    /// Ingredient lines in page order
    pub ingredients: Vec<String>,

    /// Instruction steps in page order
    pub instructions: Vec<String>,
}
