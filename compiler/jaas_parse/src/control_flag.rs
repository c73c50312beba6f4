//! Login module control flags.

use std::fmt;
use std::str::FromStr;

use crate::JaasError;

/// How one entry's outcome affects the overall authentication result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlFlag {
    /// Must succeed; evaluation continues down the list either way.
    Required,
    /// Must succeed; failure returns control immediately.
    Requisite,
    /// Success returns control immediately; failure continues down the list.
    Sufficient,
    /// Not required to succeed.
    Optional,
}

impl ControlFlag {
    /// All control flags, in declaration order.
    pub const ALL: [ControlFlag; 4] = [
        ControlFlag::Required,
        ControlFlag::Requisite,
        ControlFlag::Sufficient,
        ControlFlag::Optional,
    ];

    /// Resolve a flag keyword, ignoring ASCII case.
    ///
    /// Anything but the four keywords fails with
    /// [`JaasError::InvalidControlFlag`] carrying the original text.
    pub fn resolve(text: &str) -> Result<Self, JaasError> {
        match text.to_ascii_uppercase().as_str() {
            "REQUIRED" => Ok(ControlFlag::Required),
            "REQUISITE" => Ok(ControlFlag::Requisite),
            "SUFFICIENT" => Ok(ControlFlag::Sufficient),
            "OPTIONAL" => Ok(ControlFlag::Optional),
            _ => Err(JaasError::InvalidControlFlag(text.to_owned())),
        }
    }

    /// The canonical lowercase keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            ControlFlag::Required => "required",
            ControlFlag::Requisite => "requisite",
            ControlFlag::Sufficient => "sufficient",
            ControlFlag::Optional => "optional",
        }
    }
}

impl FromStr for ControlFlag {
    type Err = JaasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlFlag::resolve(s)
    }
}

impl fmt::Display for ControlFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        for text in ["required", "Required", "REQUIRED", "rEqUiReD"] {
            assert_eq!(ControlFlag::resolve(text).ok(), Some(ControlFlag::Required));
        }
    }

    #[test]
    fn test_resolve_all_keywords() {
        for flag in ControlFlag::ALL {
            assert_eq!(ControlFlag::resolve(flag.keyword()).ok(), Some(flag));
            assert_eq!(flag.to_string().parse::<ControlFlag>().ok(), Some(flag));
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_text() {
        let err = ControlFlag::resolve("bogus");
        assert!(matches!(err, Err(JaasError::InvalidControlFlag(ref raw)) if raw == "bogus"));
    }

    #[test]
    fn test_resolve_keeps_original_case_in_error() {
        let err = ControlFlag::resolve("Mandatory");
        assert!(matches!(err, Err(JaasError::InvalidControlFlag(ref raw)) if raw == "Mandatory"));
    }

    #[test]
    fn test_resolve_rejects_prefix_and_padding() {
        assert!(ControlFlag::resolve("require").is_err());
        assert!(ControlFlag::resolve(" required").is_err());
        assert!(ControlFlag::resolve("").is_err());
    }
}
