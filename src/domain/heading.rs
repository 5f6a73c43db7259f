use std::{fmt, str::FromStr};

/// The numeric rank of an HTML heading tag, where [`HeadingLevel::H1`] is the
/// most significant.
///
/// Levels are ordered by rank (`H1 < H2 < … < H6`) and display as the
/// lowercase tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
}

impl HeadingLevel {
    /// All six levels in reference order, `h1` first.
    pub const ALL: [Self; 6] = [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

    /// Returns the numeric rank (1–6).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    /// Returns the level with the given numeric rank, if it is in 1–6.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    /// Returns the lowercase tag name, e.g. `"h3"`.
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// Error returned when a string is not a heading tag name (`h1`–`h6`,
/// case-insensitive).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("'{0}' is not a heading tag name (expected h1-h6)")]
pub struct InvalidHeadingError(String);

impl FromStr for HeadingLevel {
    type Err = InvalidHeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some('h' | 'H'), Some(digit), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(InvalidHeadingError(s.to_string()));
        };

        digit
            .to_digit(10)
            .and_then(|rank| Self::from_rank(u8::try_from(rank).ok()?))
            .ok_or_else(|| InvalidHeadingError(s.to_string()))
    }
}

impl TryFrom<&str> for HeadingLevel {
    type Error = InvalidHeadingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}
