use serde::{Deserialize, Serialize};

/// Subcategory used when no detail page strategy produced a label
pub const UNKNOWN_SUBCATEGORY: &str = "Unknown";

/// Column names of the raw record file, in write order
pub const RAW_HEADERS: [&str; 6] = [
    "Title",
    "Price",
    "Rating",
    "Availability",
    "URL",
    "Subcategory",
];

/// One listing entry as scraped, before any cleaning
///
/// Price keeps its currency symbol and availability is the page's free text;
/// the dataset cleaner is responsible for making sense of both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBookRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Price")]
    pub price: String,

    /// Star rating mapped to 1-5, or 0 for an unrecognized code
    #[serde(rename = "Rating")]
    pub rating: u8,

    #[serde(rename = "Availability")]
    pub availability: String,

    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "Subcategory")]
    pub subcategory: String,
}

/// The ordinal code words used by star-rating markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingCode {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl RatingCode {
    /// Parses a code word such as `"Three"`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "One" => Some(Self::One),
            "Two" => Some(Self::Two),
            "Three" => Some(Self::Three),
            "Four" => Some(Self::Four),
            "Five" => Some(Self::Five),
            _ => None,
        }
    }

    pub fn value(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

/// Maps a code word to its rating, with 0 for anything unrecognized
///
/// Zero never survives cleaning, so an odd code only costs that one record.
pub fn rating_from_code(code: &str) -> u8 {
    RatingCode::from_code(code).map_or(0, |r| r.value())
}
