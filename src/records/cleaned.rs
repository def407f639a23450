use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Normalized stock status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Availability {
    /// Normalizes free availability text
    ///
    /// Anything that does not contain "in stock" (case-insensitively) is out of stock.
    pub fn from_text(text: &str) -> Self {
        if text.to_lowercase().contains("in stock") {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Stock" => Ok(Self::InStock),
            "Out of Stock" => Ok(Self::OutOfStock),
            other => Err(format!("unknown availability '{}'", other)),
        }
    }
}

/// A validated row of the cleaned dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedBookRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Price")]
    pub price: f64,

    #[serde(rename = "Rating")]
    pub rating: u8,

    #[serde(rename = "Availability")]
    pub availability: Availability,

    #[serde(rename = "URL")]
    pub url: String,
}

impl CleanedBookRecord {
    /// Checks every field constraint of the cleaned dataset
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty()
            && self.price.is_finite()
            && self.price >= 0.0
            && (1..=5).contains(&self.rating)
    }
}
