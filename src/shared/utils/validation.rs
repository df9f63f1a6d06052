use crate::shared::errors::AppError;

/// Minimum password length accepted by the mock auth flow
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct Validator;

impl Validator {
    pub fn validate_email(email: &str) -> Result<(), AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::validation("email", "Email cannot be empty"));
        }
        if !email.contains('@') {
            return Err(AppError::validation(
                "email",
                "Please enter a valid email address",
            ));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), AppError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        Ok(())
    }

    pub fn validate_username(username: &str) -> Result<(), AppError> {
        if username.trim().is_empty() {
            return Err(AppError::validation("username", "Username cannot be empty"));
        }
        if username.len() > 50 {
            return Err(AppError::validation(
                "username",
                "Username too long (max 50 characters)",
            ));
        }
        Ok(())
    }

    pub fn validate_page(page: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::validation("page", "Page numbers start at 1"));
        }
        Ok(())
    }
}
