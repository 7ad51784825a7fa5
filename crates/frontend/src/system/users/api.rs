use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use crate::shared::api_utils;

const USERS: &str = "/api/system/users";

pub async fn fetch_users() -> Result<Vec<User>, String> {
    api_utils::get_json(USERS).await
}

/// Returns the id of the new user
pub async fn create_user(dto: &CreateUserDto) -> Result<String, String> {
    api_utils::post_json(USERS, dto).await
}

pub async fn update_user(dto: &UpdateUserDto) -> Result<(), String> {
    api_utils::patch_json(&format!("{}/{}", USERS, dto.id), dto).await
}

pub async fn delete_user(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", USERS, id)).await
}

/// An administrator resetting someone else's password sends no old password
pub async fn change_password(dto: &ChangePasswordDto) -> Result<(), String> {
    api_utils::post_action(&format!("{}/{}/change-password", USERS, dto.user_id), dto).await
}
