pub mod groq;
pub mod model;
pub mod prompt;
pub mod summarizer;
