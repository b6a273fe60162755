use std::fmt;
use std::str::FromStr;

/// Column a report is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Count,
    License,
    #[default]
    Name,
    Author,
    Maintainer,
    Url,
}

impl SortKey {
    pub const VARIANTS: &'static str =
        "count (c), license (l), name (n), author (a), maintainer (m), url (u)";
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" | "c" => Ok(SortKey::Count),
            "license" | "l" => Ok(SortKey::License),
            "name" | "n" => Ok(SortKey::Name),
            "author" | "a" => Ok(SortKey::Author),
            "maintainer" | "m" => Ok(SortKey::Maintainer),
            "url" | "u" => Ok(SortKey::Url),
            _ => Err(format!(
                "Invalid sort key: {}. Please specify one of: {}",
                s,
                Self::VARIANTS
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Count => write!(f, "count"),
            SortKey::License => write!(f, "license"),
            SortKey::Name => write!(f, "name"),
            SortKey::Author => write!(f, "author"),
            SortKey::Maintainer => write!(f, "maintainer"),
            SortKey::Url => write!(f, "url"),
        }
    }
}
