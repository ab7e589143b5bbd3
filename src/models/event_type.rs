use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a punch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Entry,
    Exit,
}

impl EventKind {
    /// Accepts the stored names plus the short `in`/`out` aliases used at the CLI.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "entry" | "in" => Some(Self::Entry),
            "exit" | "out" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Entry => "entry",
            EventKind::Exit => "exit",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, EventKind::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, EventKind::Exit)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_db_str())
    }
}

/// How a punch reached the system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMethod {
    #[default]
    Manual,
    Facial,
    Location,
    Adjustment,
}

impl CaptureMethod {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CaptureMethod::Manual => "manual",
            CaptureMethod::Facial => "facial",
            CaptureMethod::Location => "location",
            CaptureMethod::Adjustment => "adjustment",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Some(CaptureMethod::Manual),
            "facial" => Some(CaptureMethod::Facial),
            "location" => Some(CaptureMethod::Location),
            "adjustment" => Some(CaptureMethod::Adjustment),
            _ => None,
        }
    }
}

impl fmt::Display for CaptureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_db_str())
    }
}
