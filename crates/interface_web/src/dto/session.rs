//! Session view models

use serde::Serialize;

use crate::identity::UserProfile;

/// The user-menu widget contents.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub display_name: String,
    pub email: String,
    pub role: String,
    /// Avatar fallback initials
    pub initials: String,
}

impl SessionView {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            initials: profile.initials(),
            display_name: profile.display_name.clone(),
            email: profile.email.clone(),
            role: profile.role.clone(),
        }
    }
}
