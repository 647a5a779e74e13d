//! Error codes for the garage back office
//!
//! - 0xxx: General errors
//! - 6xxx: Sequence code errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum, serialized as its u16 value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 6xxx: Sequence ====================
    /// Atomic increment failed or returned no counter
    SequenceGenerationFailed = 6001,
    /// Read-only counter lookup failed
    SequenceReadFailed = 6002,
    /// Domain name is not one of the known code domains
    UnknownCodeDomain = 6003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::SequenceGenerationFailed => "Failed to generate sequence code",
            ErrorCode::SequenceReadFailed => "Failed to read sequence counter",
            ErrorCode::UnknownCodeDomain => "Unknown code domain",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            6001 => Ok(ErrorCode::SequenceGenerationFailed),
            6002 => Ok(ErrorCode::SequenceReadFailed),
            6003 => Ok(ErrorCode::UnknownCodeDomain),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::SequenceGenerationFailed.code(), 6001);
        assert_eq!(ErrorCode::SequenceReadFailed.code(), 6002);
        assert_eq!(ErrorCode::UnknownCodeDomain.code(), 6003);
    }

    #[test]
    fn test_try_from_roundtrip() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::SequenceGenerationFailed,
            ErrorCode::UnknownCodeDomain,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::SequenceReadFailed).unwrap();
        assert_eq!(json, "6002");
        let code: ErrorCode = serde_json::from_str("6001").unwrap();
        assert_eq!(code, ErrorCode::SequenceGenerationFailed);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }
}
