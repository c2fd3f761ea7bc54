use crate::config::CredentialPolicy;
use crate::errors::{IrmsError, IrmsResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9]+$").expect("analyst name pattern is valid");
}

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 9;

/// Validates analyst names, passwords and incident ratings before they reach state
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    policy: CredentialPolicy,
}

impl InputValidator {
    pub fn new(policy: CredentialPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    /// Names are ASCII letters and digits only, at least `name_min_length` long
    pub fn validate_name(&self, name: &str) -> IrmsResult<()> {
        if name.len() < self.policy.name_min_length || !NAME_PATTERN.is_match(name) {
            return Err(IrmsError::invalid_analyst_name(name));
        }
        Ok(())
    }

    /// Passwords need a letter, a digit and an ASCII punctuation character,
    /// and nothing outside those three classes
    pub fn validate_password(&self, password: &str) -> IrmsResult<()> {
        let length = password.chars().count();
        if length < self.policy.password_min_length || length > self.policy.password_max_length {
            return Err(IrmsError::invalid_password(format!(
                "length {length} outside {}..={}",
                self.policy.password_min_length, self.policy.password_max_length
            )));
        }

        if let Some(bad) = password
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || is_special(*c)))
        {
            return Err(IrmsError::invalid_password(format!(
                "character {bad:?} is not permitted"
            )));
        }

        let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(is_special);

        match (has_letter, has_digit, has_special) {
            (true, true, true) => Ok(()),
            (false, _, _) => Err(IrmsError::invalid_password("missing a letter")),
            (_, false, _) => Err(IrmsError::invalid_password("missing a digit")),
            (_, _, false) => Err(IrmsError::invalid_password("missing a special character")),
        }
    }

    /// Ratings must land in 0..=9; returns the narrowed value
    pub fn validate_rating(&self, rating: i64) -> IrmsResult<u8> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(IrmsError::InvalidRating { rating });
        }
        Ok(rating as u8)
    }
}

fn is_special(c: char) -> bool {
    c.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid_password(result: IrmsResult<()>) -> bool {
        matches!(result, Err(IrmsError::InvalidPassword { .. }))
    }

    #[test]
    fn test_name_validation() {
        let validator = InputValidator::default();

        assert!(validator.validate_name("john").is_ok());
        assert!(validator.validate_name("analystA").is_ok());
        assert!(validator.validate_name("a1b2c3").is_ok());

        assert!(validator.validate_name("abc").is_err());
        assert!(validator.validate_name("john_").is_err());
        assert!(validator.validate_name("jo hn").is_err());
        assert!(validator.validate_name("jöhnny").is_err());
        assert!(validator.validate_name("").is_err());
    }

    #[test]
    fn test_password_length_bounds() {
        let validator = InputValidator::default();

        assert!(is_invalid_password(validator.validate_password("A1!aaaaa")));
        assert!(validator.validate_password("GoodPass1!").is_ok());
        assert!(validator.validate_password("Abcdefghij1234!!").is_ok());
        assert!(is_invalid_password(
            validator.validate_password("Abcdefghij12345!!")
        ));
    }

    #[test]
    fn test_password_character_classes() {
        let validator = InputValidator::default();

        assert!(is_invalid_password(validator.validate_password("Abcdef1234")));
        assert!(is_invalid_password(validator.validate_password("Abcdef!@#$")));
        assert!(is_invalid_password(validator.validate_password("12345!@#$%")));
        assert!(is_invalid_password(validator.validate_password("Abcdefghij")));
        assert!(is_invalid_password(validator.validate_password("1234567890")));
        assert!(is_invalid_password(validator.validate_password("!@#$%^&*()")));
        assert!(is_invalid_password(validator.validate_password("Good Pass1!")));
    }

    #[test]
    fn test_policy_overrides() {
        let validator = InputValidator::new(CredentialPolicy {
            name_min_length: 2,
            password_min_length: 4,
            password_max_length: 8,
        });

        assert!(validator.validate_name("ab").is_ok());
        assert!(validator.validate_password("a1!b").is_ok());
        assert!(validator.validate_password("GoodPass1!").is_err());
    }

    #[test]
    fn test_rating_validation() {
        let validator = InputValidator::default();

        assert_eq!(validator.validate_rating(0).unwrap(), 0);
        assert_eq!(validator.validate_rating(9).unwrap(), 9);
        assert!(matches!(
            validator.validate_rating(-1),
            Err(IrmsError::InvalidRating { rating: -1 })
        ));
        assert!(matches!(
            validator.validate_rating(10),
            Err(IrmsError::InvalidRating { rating: 10 })
        ));
    }
}
