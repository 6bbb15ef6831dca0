//! Validated CRUD operation flags

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DomainError;

/// Operation strings are made of the letters C, R, U and D in any case
static OPERATION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[CRUDcrud]*$").unwrap());

/// Which table operations a `/crud` request asked for
///
/// Operations always run in create, read, update, delete order no matter how
/// the letters were arranged; repeated letters have no extra effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrudFlags {
    pub create: bool,
    pub read: bool,
    pub update: bool,
    pub delete: bool,
}

impl CrudFlags {
    pub fn parse(operation: &str) -> Result<Self, DomainError> {
        if !OPERATION_PATTERN.is_match(operation) {
            return Err(DomainError::validation(format!(
                "Invalid operation '{}': only the letters C, R, U and D are allowed",
                operation
            )));
        }

        let mut flags = Self::default();

        for letter in operation.chars().map(|c| c.to_ascii_uppercase()) {
            match letter {
                'C' => flags.create = true,
                'R' => flags.read = true,
                'U' => flags.update = true,
                'D' => flags.delete = true,
                _ => {}
            }
        }

        Ok(flags)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for CrudFlags {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CrudFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (enabled, letter) in [
            (self.create, 'C'),
            (self.read, 'R'),
            (self.update, 'U'),
            (self.delete, 'D'),
        ] {
            if enabled {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_operations() {
        let flags = CrudFlags::parse("CRUD").unwrap();

        assert!(flags.create && flags.read && flags.update && flags.delete);
        assert_eq!(flags.to_string(), "CRUD");
    }

    #[test]
    fn test_parse_is_case_insensitive_and_order_free() {
        let flags: CrudFlags = "dr".parse().unwrap();

        assert_eq!(
            flags,
            CrudFlags {
                create: false,
                read: true,
                update: false,
                delete: true,
            }
        );
        assert_eq!(flags.to_string(), "RD");
    }

    #[test]
    fn test_empty_operation_is_valid() {
        let flags = CrudFlags::parse("").unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn test_rejects_other_characters() {
        assert!(CrudFlags::parse("create").is_err());
        assert!(CrudFlags::parse("C R").is_err());
        assert!(matches!(
            CrudFlags::parse("X"),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_repeated_letters() {
        let flags = CrudFlags::parse("CCc").unwrap();
        assert_eq!(flags.to_string(), "C");
    }
}
