use contracts::system::access::AccessTier;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn role(&self) -> Option<i32> {
        self.user_info.as_ref().map(|u| u.role)
    }

    pub fn tier(&self) -> AccessTier {
        AccessTier::from_role(self.role())
    }
}

/// Restores the stored session on mount, refreshing the access token when it has expired.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };

            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        return;
                    };
                    match api::refresh_token(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            if let Ok(user_info) =
                                api::get_current_user(&response.access_token).await
                            {
                                set_auth_state.set(AuthState {
                                    access_token: Some(response.access_token),
                                    user_info: Some(user_info),
                                });
                            }
                        }
                        Err(e) => {
                            log::info!("session expired: {}", e);
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Stores the tokens of a successful login and switches to the main layout
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    log::info!("signed in as {} (role {})", response.user.username, response.user.role);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Revokes the refresh token and clears the session; the login page shows next
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: i32) -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            username: "admin".into(),
            full_name: None,
            email: None,
            role,
        }
    }

    #[test]
    fn test_tier_from_session() {
        let anonymous = AuthState::default();
        assert_eq!(anonymous.role(), None);
        assert_eq!(anonymous.tier(), AccessTier::SignOutOnly);

        let state = AuthState {
            access_token: Some("t".into()),
            user_info: Some(user(3)),
        };
        assert_eq!(state.tier(), AccessTier::Restricted);
    }
}
