use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // A required field was blank or a numeric field was out of range.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The book exists but is checked out; callers may try again once it is available.
    CurrentlyUnavailable {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => message.as_str(),
            LibraryError::DuplicateKey { message } => message.as_str(),
            LibraryError::NotFound { message } => message.as_str(),
            LibraryError::CurrentlyUnavailable { message } => message.as_str(),
            LibraryError::Serialization { message } => message.as_str(),
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code: Some(code) } => {
                write!(f, "{} ({})", message, code)
            }
            _ => {
                write!(f, "{}", self.message())
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Returns the trimmed value or a validation error naming the field.
pub(crate) fn require_text(field: &str, value: &str) -> LibraryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::validation(
            format!("{} cannot be empty", field).as_str(), Some(field.to_lowercase())));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum BookKind {
    Digital,
    Physical,
    Audio,
}

impl BookKind {
    pub const ALL: [BookKind; 3] = [BookKind::Digital, BookKind::Physical, BookKind::Audio];

    // Number of days a book of this kind may be kept once checked out.
    pub fn checkout_period_days(&self) -> u32 {
        match self {
            BookKind::Digital => 7,
            BookKind::Physical => 14,
            BookKind::Audio => 21,
        }
    }
}

impl FromStr for BookKind {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "digital" | "digitalbook" => Ok(BookKind::Digital),
            "physical" | "physicalbook" => Ok(BookKind::Physical),
            "audio" | "audiobook" => Ok(BookKind::Audio),
            other => Err(LibraryError::validation(
                format!("unknown book kind {:?}", other).as_str(), Some("kind".to_string()))),
        }
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookKind::Digital => write!(f, "Digital"),
            BookKind::Physical => write!(f, "Physical"),
            BookKind::Audio => write!(f, "Audio"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{require_text, BookKind, LibraryError};

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_unavailable_error() {
        assert!(matches!(LibraryError::unavailable("test"), LibraryError::CurrentlyUnavailable{ message: _ }));
    }

    #[test]
    fn test_should_convert_json_error() {
        let err = serde_json::from_str::<u32>("not json").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_format_errors() {
        assert_eq!("dup", LibraryError::duplicate_key("dup").to_string());
        assert_eq!("bad (title)", LibraryError::validation("bad", Some("title".to_string())).to_string());
        assert_eq!("bad", LibraryError::validation("bad", None).to_string());
    }

    #[test]
    fn test_should_require_text() {
        assert_eq!("abc", require_text("Title", "  abc ").expect("should trim"));
        let err = require_text("Title", "   ").expect_err("should reject blank");
        assert_eq!("Title cannot be empty (title)", err.to_string());
    }

    #[test]
    fn test_should_parse_book_kind() {
        for kind in BookKind::ALL {
            let str_kind: BookKind = kind.to_string().parse().expect("should parse");
            assert_eq!(kind, str_kind);
        }
        assert_eq!(BookKind::Digital, "digital".parse().expect("lower case tag"));
        assert_eq!(BookKind::Audio, "AudioBook".parse().expect("class-like name"));
        assert!("magazine".parse::<BookKind>().is_err());
    }

    #[test]
    fn test_should_fix_checkout_periods() {
        assert_eq!(7, BookKind::Digital.checkout_period_days());
        assert_eq!(14, BookKind::Physical.checkout_period_days());
        assert_eq!(21, BookKind::Audio.checkout_period_days());
    }
}
