use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Urination,
    Defecation,
}

impl EntryType {
    pub const ALL: [EntryType; 2] = [EntryType::Urination, EntryType::Defecation];

    /// Parse user input; accepts the long names and a couple of short aliases.
    pub fn et_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "urination" | "pee" | "u" => Some(Self::Urination),
            "defecation" | "poo" | "d" => Some(Self::Defecation),
            _ => None,
        }
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EntryType::Urination => "urination",
            EntryType::Defecation => "defecation",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.et_as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "urination" => Some(EntryType::Urination),
            "defecation" => Some(EntryType::Defecation),
            _ => None,
        }
    }

    /// Short label used by the text charts.
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Urination => "pee",
            EntryType::Defecation => "poo",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.et_as_str())
    }
}
