use itertools::Itertools;

use crate::types::Document;

/// Separator placed between documents when they are stuffed into one prompt.
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

pub const DEFAULT_TEMPLATE: &str = "
Provide a summary of the following content in 300 words:
content: {text}
";

/// A prompt with a single `{text}` slot.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl PromptTemplate {
    const VARIABLE: &str = "{text}";

    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, text: &str) -> String {
        self.template.replace(Self::VARIABLE, text)
    }

    /// Stuffs every document into the template.
    pub fn format(&self, documents: &[Document]) -> String {
        let text = documents
            .iter()
            .map(|d| d.page_content.as_str())
            .join(DOCUMENT_SEPARATOR);
        self.render(&text)
    }
}
