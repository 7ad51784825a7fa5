use chrono::Utc;
use contracts::system::access::AccessTier;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::auth::password;

pub async fn create(dto: CreateUserDto, created_by: Option<String>) -> ServiceResult<String> {
    dto.validate().map_err(ServiceError::Validation)?;
    let username = dto.username.trim().to_string();

    if repository::get_by_username(&username).await?.is_some() {
        return Err(ServiceError::Conflict("این نام کاربری قبلا ثبت شده است".into()));
    }

    password::validate_password_strength(&dto.password)
        .map_err(|e| ServiceError::validation(e.to_string()))?;

    let password_hash = password::hash_password(&dto.password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        username,
        email: dto.email,
        full_name: dto.full_name,
        is_active: true,
        role: dto.role,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
        created_by,
    };

    repository::create_with_password(&user, &password_hash).await?;
    tracing::info!("Created user {} with role {}", user.username, user.role);

    Ok(user_id)
}

pub async fn update(dto: UpdateUserDto) -> ServiceResult<()> {
    let mut user = repository::get_by_id(&dto.id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    dto.validate().map_err(ServiceError::Validation)?;

    user.email = dto.email;
    user.full_name = dto.full_name;
    user.is_active = dto.is_active;
    user.role = dto.role;
    user.updated_at = Utc::now().to_rfc3339();

    repository::update(&user).await?;

    Ok(())
}

pub async fn delete(id: &str, requester_id: &str) -> ServiceResult<()> {
    if id == requester_id {
        return Err(ServiceError::Conflict("حساب خودتان را نمی توانید حذف کنید".into()));
    }
    if repository::delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

pub async fn get_by_id(id: &str) -> ServiceResult<Option<User>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> ServiceResult<Vec<User>> {
    Ok(repository::list_all().await?)
}

pub async fn change_password(dto: ChangePasswordDto, requester_id: &str) -> ServiceResult<()> {
    repository::get_by_id(&dto.user_id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let requester = repository::get_by_id(requester_id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    if dto.user_id != requester_id {
        // Someone else's password: Full tier only, old password not needed
        if !AccessTier::from_role(Some(requester.role)).can_manage_users() {
            return Err(ServiceError::Forbidden("اجازه تغییر رمز این کاربر را ندارید".into()));
        }
    } else {
        let old_password = dto
            .old_password
            .as_deref()
            .ok_or_else(|| ServiceError::validation("رمز فعلی الزامی است"))?;
        let current_hash = repository::get_password_hash(&dto.user_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        if !password::verify_password(old_password, &current_hash)? {
            return Err(ServiceError::validation("رمز فعلی نادرست است"));
        }
    }

    password::validate_password_strength(&dto.new_password)
        .map_err(|e| ServiceError::validation(e.to_string()))?;
    let new_hash = password::hash_password(&dto.new_password)?;

    repository::update_password(&dto.user_id, &new_hash).await?;

    Ok(())
}

/// Verify user credentials (for login). Inactive users cannot log in.
pub async fn verify_credentials(username: &str, password: &str) -> anyhow::Result<Option<User>> {
    let user = match repository::get_by_username(username.trim()).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    if !user.is_active {
        tracing::warn!("Login attempt for inactive user {}", user.username);
        return Ok(None);
    }

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    if let Err(e) = repository::update_last_login(&user.id).await {
        tracing::warn!("Failed to update last login for {}: {}", user.username, e);
    }

    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;

    async fn user(role: i32) -> String {
        create(
            CreateUserDto {
                username: format!("user-{}", uuid::Uuid::new_v4().simple()),
                password: "secret-1".into(),
                email: None,
                full_name: None,
                role,
            },
            None,
        )
        .await
        .unwrap()
    }

    fn change(user_id: &str, old_password: Option<&str>) -> ChangePasswordDto {
        ChangePasswordDto {
            user_id: user_id.into(),
            old_password: old_password.map(Into::into),
            new_password: "secret-2".into(),
        }
    }

    #[test]
    fn test_other_users_password_needs_full_tier() {
        run(async {
            let target = user(3).await;
            let restricted = user(3).await;
            let err = change_password(change(&target, None), &restricted)
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Forbidden(_)));
            assert_eq!(err.status(), axum::http::StatusCode::FORBIDDEN);

            let manager = user(1).await;
            change_password(change(&target, None), &manager).await.unwrap();
        });
    }

    #[test]
    fn test_own_password_needs_the_current_one() {
        run(async {
            let me = user(3).await;
            let err = change_password(change(&me, Some("wrong-pass")), &me)
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));

            change_password(change(&me, Some("secret-1")), &me).await.unwrap();
            let username = get_by_id(&me).await.unwrap().unwrap().username;
            assert!(verify_credentials(&username, "secret-2").await.unwrap().is_some());
        });
    }

    #[test]
    fn test_users_cannot_delete_themselves() {
        run(async {
            let me = user(0).await;
            assert!(matches!(delete(&me, &me).await, Err(ServiceError::Conflict(_))));
        });
    }
}
