//! Supported display languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LifeError;

/// Language tag controlling number and date formatting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::EnUs, Language::EsEs, Language::ZhCn];

    /// BCP 47 tag
    pub fn tag(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EsEs => "es-ES",
            Language::ZhCn => "zh-CN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<String> for Language {
    type Error = LifeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for Language {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LifeError::UnsupportedLanguage(trimmed.to_string()))
    }
}
