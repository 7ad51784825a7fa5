use contracts::system::access::AccessTier;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::forms::optional_text;
use crate::system::users::api;

/// Role numbers offered in the form
pub const ROLE_OPTIONS: &[(i32, &str)] = &[
    (0, "مدیر کل"),
    (1, "مدیر"),
    (3, "کرایه و امور مالی"),
    (2, "بدون دسترسی"),
];

pub fn role_label(role: i32) -> String {
    ROLE_OPTIONS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| match AccessTier::from_role(Some(role)) {
            AccessTier::Full => format!("مدیر ({})", role),
            AccessTier::Restricted => format!("محدود ({})", role),
            AccessTier::SignOutOnly => format!("بدون دسترسی ({})", role),
        })
}

#[derive(Clone, Copy)]
pub struct UserDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub email: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub role: RwSignal<String>,
    pub is_active: RwSignal<bool>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl UserDetailsVm {
    pub fn new(initial: Option<User>) -> Self {
        let (id, username, email, full_name, role, is_active) = match initial {
            Some(u) => (Some(u.id), u.username, u.email, u.full_name, u.role, u.is_active),
            None => (None, String::new(), None, None, 3, true),
        };
        Self {
            id: RwSignal::new(id),
            username: RwSignal::new(username),
            password: RwSignal::new(String::new()),
            email: RwSignal::new(email.unwrap_or_default()),
            full_name: RwSignal::new(full_name.unwrap_or_default()),
            role: RwSignal::new(role.to_string()),
            is_active: RwSignal::new(is_active),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    fn role_number(&self) -> Result<i32, String> {
        self.role
            .get_untracked()
            .parse::<i32>()
            .map_err(|_| "نقش کاربر انتخاب نشده است".to_string())
    }

    pub fn build_create(&self) -> Result<CreateUserDto, String> {
        let dto = CreateUserDto {
            username: self.username.get_untracked().trim().to_string(),
            password: self.password.get_untracked(),
            email: optional_text(&self.email.get_untracked()),
            full_name: optional_text(&self.full_name.get_untracked()),
            role: self.role_number()?,
        };
        dto.validate()?;
        Ok(dto)
    }

    pub fn build_update(&self, id: String) -> Result<UpdateUserDto, String> {
        let dto = UpdateUserDto {
            id,
            email: optional_text(&self.email.get_untracked()),
            full_name: optional_text(&self.full_name.get_untracked()),
            is_active: self.is_active.get_untracked(),
            role: self.role_number()?,
        };
        dto.validate()?;
        Ok(dto)
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let this = *self;
        let id = this.id.get_untracked();

        let request = match id {
            None => this.build_create().map(|dto| (Some(dto), None, None)),
            Some(id) => this.build_update(id.clone()).map(|dto| {
                let reset = optional_text(&this.password.get_untracked()).map(|new_password| {
                    ChangePasswordDto {
                        user_id: id,
                        old_password: None,
                        new_password,
                    }
                });
                (None, Some(dto), reset)
            }),
        };
        let (create, update, reset) = match request {
            Ok(parts) => parts,
            Err(e) => {
                this.error.set(Some(e));
                return;
            }
        };

        this.error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            let result = async {
                if let Some(dto) = create {
                    let id = api::create_user(&dto).await?;
                    log::info!("user {} created ({})", dto.username, id);
                }
                if let Some(dto) = update {
                    api::update_user(&dto).await?;
                }
                if let Some(dto) = reset {
                    api::change_password(&dto).await?;
                }
                Ok::<(), String>(())
            }
            .await;
            this.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label() {
        assert_eq!(role_label(0), "مدیر کل");
        assert_eq!(role_label(3), "کرایه و امور مالی");
        assert_eq!(role_label(7), "بدون دسترسی (7)");
    }

    #[test]
    fn test_role_options_cover_every_tier() {
        let tiers: Vec<_> = ROLE_OPTIONS
            .iter()
            .map(|(r, _)| AccessTier::from_role(Some(*r)))
            .collect();
        assert!(tiers.contains(&AccessTier::Full));
        assert!(tiers.contains(&AccessTier::Restricted));
        assert!(tiers.contains(&AccessTier::SignOutOnly));
    }
}
