//! Error codes for call-checking diagnostics.
//!
//! The leading letter gives the default severity (`E` error, `W` warning).
//! All codes are in the 4xxx call-checking range.

use std::fmt;

use crate::Severity;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Call-checking errors (E4xxx)
    /// Call to a declaration deprecated at error level
    E4001,
    /// Callee is not visible from the call site
    E4002,
    /// Property setter is not visible from the assignment site
    E4003,
    /// Callee requires a language feature that is not enabled
    E4004,
    /// Non-constant call used as an annotation argument
    E4005,

    // Call-checking warnings (W4xxx)
    /// Call to a deprecated declaration
    W4001,
    /// Return type silently inferred as `Nothing`
    W4002,
    /// Safe call on a receiver known to be non-null
    W4003,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E4001,
        ErrorCode::E4002,
        ErrorCode::E4003,
        ErrorCode::E4004,
        ErrorCode::E4005,
        ErrorCode::W4001,
        ErrorCode::W4002,
        ErrorCode::W4003,
    ];

    /// Get the code as a string (e.g., "E4002").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            ErrorCode::E4004 => "E4004",
            ErrorCode::E4005 => "E4005",
            ErrorCode::W4001 => "W4001",
            ErrorCode::W4002 => "W4002",
            ErrorCode::W4003 => "W4003",
        }
    }

    /// Short upper-snake name, stable across releases.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E4001 => "DEPRECATION_ERROR",
            ErrorCode::E4002 => "INVISIBLE_MEMBER",
            ErrorCode::E4003 => "INVISIBLE_SETTER",
            ErrorCode::E4004 => "UNSUPPORTED_FEATURE",
            ErrorCode::E4005 => "NON_CONST_CALL_IN_ANNOTATION",
            ErrorCode::W4001 => "DEPRECATION",
            ErrorCode::W4002 => "IMPLICIT_NOTHING_RETURN",
            ErrorCode::W4003 => "UNNECESSARY_SAFE_CALL",
        }
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W4001 | ErrorCode::W4002 | ErrorCode::W4003)
    }

    /// Severity a diagnostic with this code is created with.
    pub fn default_severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
