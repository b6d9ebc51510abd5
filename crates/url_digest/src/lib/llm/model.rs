use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The closed set of Groq hosted models offered to the user.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Model {
    #[default]
    #[serde(rename = "llama-3.1-70b-versatile")]
    #[value(name = "llama-3.1-70b-versatile")]
    Llama31_70bVersatile,
    #[serde(rename = "llama-3.1-8b-instant")]
    #[value(name = "llama-3.1-8b-instant")]
    Llama31_8bInstant,
    #[serde(rename = "gemma-7b-it")]
    #[value(name = "gemma-7b-it")]
    Gemma7bIt,
    #[serde(rename = "llama-3.2-90b-vision-preview")]
    #[value(name = "llama-3.2-90b-vision-preview")]
    Llama32_90bVisionPreview,
    #[serde(rename = "llama3-70b-8192")]
    #[value(name = "llama3-70b-8192")]
    Llama3_70b8192,
    #[serde(rename = "mixtral-8x7b-32768")]
    #[value(name = "mixtral-8x7b-32768")]
    Mixtral8x7b32768,
}

impl Model {
    /// Dropdown order.
    pub const ALL: [Model; 6] = [
        Model::Llama31_70bVersatile,
        Model::Llama31_8bInstant,
        Model::Gemma7bIt,
        Model::Llama32_90bVisionPreview,
        Model::Llama3_70b8192,
        Model::Mixtral8x7b32768,
    ];

    /// Identifier sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Llama31_70bVersatile => "llama-3.1-70b-versatile",
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
            Model::Gemma7bIt => "gemma-7b-it",
            Model::Llama32_90bVisionPreview => "llama-3.2-90b-vision-preview",
            Model::Llama3_70b8192 => "llama3-70b-8192",
            Model::Mixtral8x7b32768 => "mixtral-8x7b-32768",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported model: {0}")]
pub struct UnknownModel(String);

impl FromStr for Model {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}
