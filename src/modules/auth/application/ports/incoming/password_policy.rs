pub trait PasswordPolicy: Send + Sync {
    fn validate(&self, username: &str, password: &str) -> Result<(), PasswordPolicyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("This password is too short. It must contain at least 8 characters.")]
    TooShort,

    #[error("This password is too long.")]
    TooLong,

    #[error("This password is entirely numeric.")]
    EntirelyNumeric,

    #[error("The password cannot be the same as the username.")]
    SameAsUsername,
}
