use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    /// Role number, see `system::access::AccessTier::from_role`
    pub role: i32,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: i32,
}

impl CreateUserDto {
    /// Field checks shared by the user form and the users service
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("نام کاربری الزامی است".into());
        }
        if self.password.trim().is_empty() {
            return Err("رمز عبور نمی تواند خالی باشد".into());
        }
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub role: i32,
}

impl UpdateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)
    }
}

/// Empty or absent is fine; anything else needs an `@`
pub fn validate_email(email: &Option<String>) -> Result<(), String> {
    match email.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() && !e.contains('@') => Err("ایمیل معتبر نیست".into()),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub user_id: String,
    pub old_password: Option<String>, // None if a Full-tier user changes someone else's password
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(username: &str, password: &str, email: Option<&str>) -> CreateUserDto {
        CreateUserDto {
            username: username.into(),
            password: password.into(),
            email: email.map(str::to_string),
            full_name: None,
            role: 3,
        }
    }

    #[test]
    fn test_create_requires_username_and_password() {
        assert!(create("rent", "1234", None).validate().is_ok());
        assert!(create("  ", "1234", None).validate().is_err());
        assert!(create("rent", "", None).validate().is_err());
    }

    #[test]
    fn test_email_is_optional_but_checked() {
        assert!(validate_email(&None).is_ok());
        assert!(validate_email(&Some(" ".into())).is_ok());
        assert!(validate_email(&Some("a@b.af".into())).is_ok());
        assert!(validate_email(&Some("not-an-email".into())).is_err());
    }
}
