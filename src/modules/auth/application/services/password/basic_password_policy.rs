use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, Default)]
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, username: &str, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();

        if length < MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort);
        }

        if length > MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong);
        }

        if password.chars().all(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::EntirelyNumeric);
        }

        if password.to_lowercase() == username.trim().to_lowercase() {
            return Err(PasswordPolicyError::SameAsUsername);
        }

        Ok(())
    }
}
