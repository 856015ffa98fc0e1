use std::collections::HashMap;

use bookstore_kernel::settings::UserSeed;

use super::models::{SharedUser, User};
use crate::modules::books::service::CatalogService;
use crate::modules::error::SeedError;

/// Accounts keyed by username, at most one user per key.
///
/// Not synchronized; wrap it in a lock when more than one caller needs it.
#[derive(Debug, Default)]
pub struct AccountService {
    users: HashMap<String, SharedUser>,
}

impl AccountService {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Take over an existing account map as-is.
    pub fn with_users(users: HashMap<String, SharedUser>) -> Self {
        Self { users }
    }

    /// Build accounts from configured entries.
    ///
    /// Purchased titles resolve to the catalog's own book handles.
    pub fn from_seed(seed: &[UserSeed], catalog: &CatalogService) -> Result<Self, SeedError> {
        let mut accounts = Self::new();
        for entry in seed {
            let mut purchased = Vec::with_capacity(entry.purchased.len());
            for title in &entry.purchased {
                let book =
                    catalog
                        .find_by_title(title)
                        .ok_or_else(|| SeedError::UnknownPurchase {
                            username: entry.username.clone(),
                            title: title.clone(),
                        })?;
                purchased.push(book);
            }

            let user = User::new(&entry.username, &entry.password, &entry.email)
                .with_purchases(purchased);
            if !accounts.register(SharedUser::new(user)) {
                return Err(SeedError::DuplicateUsername {
                    username: entry.username.clone(),
                });
            }
        }
        Ok(accounts)
    }

    pub fn get(&self, username: &str) -> Option<SharedUser> {
        self.users.get(username).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Registered usernames, sorted.
    pub fn usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self.users.keys().cloned().collect();
        names.sort();
        names
    }

    /// Add `user` under its username unless that key is taken.
    /// Empty usernames are accepted like any other key.
    pub fn register(&mut self, user: SharedUser) -> bool {
        let username = user.username();
        if self.users.contains_key(&username) {
            tracing::debug!(%username, "registration rejected: username taken");
            return false;
        }

        self.users.insert(username.clone(), user);
        tracing::info!(%username, accounts = self.users.len(), "user registered");
        true
    }

    /// The stored user when `username` exists and `password` matches exactly.
    pub fn login(&self, username: &str, password: &str) -> Option<SharedUser> {
        let Some(user) = self.users.get(username) else {
            tracing::debug!(username, "login failed: unknown user");
            return None;
        };

        if !user.password_matches(password) {
            tracing::debug!(username, "login failed: wrong password");
            return None;
        }

        tracing::info!(username, "user logged in");
        Some(user.clone())
    }

    /// Overwrite the user's profile and re-key the account map.
    ///
    /// Fails when `new_username` belongs to another account. The old key is
    /// dropped when it still points at this user, so no stale entry remains.
    pub fn update_profile(
        &mut self,
        user: &SharedUser,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> bool {
        if let Some(holder) = self.users.get(new_username) {
            if !holder.same_user(user) {
                tracing::debug!(
                    username = new_username,
                    "profile update rejected: username taken"
                );
                return false;
            }
        }

        let old_username = user.username();
        if old_username != new_username {
            let owns_old_key = self
                .users
                .get(&old_username)
                .is_some_and(|entry| entry.same_user(user));
            if owns_old_key {
                self.users.remove(&old_username);
            }
        }

        user.set_profile(new_username, new_password, new_email);
        self.users.insert(new_username.to_string(), user.clone());

        tracing::info!(
            old_username = %old_username,
            username = new_username,
            "profile updated"
        );
        true
    }
}
