//! Closed enumerations shared by the slideshow models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversion status of an uploaded slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideshowStatus {
    /// Queued for conversion.
    Queued,
    /// Being converted.
    Converting,
    /// Conversion finished.
    Converted,
    /// Conversion failed.
    ConversionFailed,
}

impl SlideshowStatus {
    /// All statuses, ordered by code.
    pub const ALL: [SlideshowStatus; 4] = [
        SlideshowStatus::Queued,
        SlideshowStatus::Converting,
        SlideshowStatus::Converted,
        SlideshowStatus::ConversionFailed,
    ];

    /// Look up a status by the numeric code the service returns.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Numeric code as returned by the service.
    pub fn code(&self) -> u32 {
        match self {
            SlideshowStatus::Queued => 0,
            SlideshowStatus::Converting => 1,
            SlideshowStatus::Converted => 2,
            SlideshowStatus::ConversionFailed => 3,
        }
    }

    /// Short textual description.
    pub fn description(&self) -> &'static str {
        match self {
            SlideshowStatus::Queued => "queued",
            SlideshowStatus::Converting => "converting",
            SlideshowStatus::Converted => "converted",
            SlideshowStatus::ConversionFailed => "conversion failed",
        }
    }
}

impl fmt::Display for SlideshowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.code(), self.description())
    }
}

/// Kind of document a slideshow holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideshowType {
    /// A presentation.
    Presentation,
    /// A document.
    Document,
    /// A portfolio.
    Portfolio,
    /// A video.
    Video,
}

impl SlideshowType {
    /// All types, ordered by code.
    pub const ALL: [SlideshowType; 4] = [
        SlideshowType::Presentation,
        SlideshowType::Document,
        SlideshowType::Portfolio,
        SlideshowType::Video,
    ];

    /// Look up a type by the numeric code the service returns.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Numeric code as returned by the service.
    pub fn code(&self) -> u32 {
        match self {
            SlideshowType::Presentation => 0,
            SlideshowType::Document => 1,
            SlideshowType::Portfolio => 2,
            SlideshowType::Video => 3,
        }
    }

    /// Short textual description.
    pub fn description(&self) -> &'static str {
        match self {
            SlideshowType::Presentation => "presentation",
            SlideshowType::Document => "document",
            SlideshowType::Portfolio => "portfolio",
            SlideshowType::Video => "video",
        }
    }
}

impl fmt::Display for SlideshowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.code(), self.description())
    }
}
