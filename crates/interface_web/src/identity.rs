//! Identity capability provider
//!
//! The user-menu widget needs a display name, email, role, and a sign-out
//! operation. Until a real session integration is wired in, a placeholder
//! provider supplies a fixed profile; the rest of the crate depends only
//! on the trait.

/// Profile shown in the user menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
    pub role: String,
}

impl UserProfile {
    /// Avatar fallback initials: first letter of each name part,
    /// uppercased; "U" when there is no name to draw from.
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

/// Session capability the user menu depends on
pub trait IdentityProvider: Send + Sync {
    /// The signed-in profile
    fn current_profile(&self) -> UserProfile;

    /// Ends the session and returns the post-logout destination
    fn sign_out(&self, redirect_target: &str) -> String;
}

/// Placeholder provider used until a real session integration exists
#[derive(Debug, Clone, Default)]
pub struct PlaceholderIdentity;

impl IdentityProvider for PlaceholderIdentity {
    fn current_profile(&self) -> UserProfile {
        UserProfile {
            display_name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: "Admin Focal".to_string(),
        }
    }

    // There is no real session to clear; honoring the redirect is the
    // whole contract.
    fn sign_out(&self, redirect_target: &str) -> String {
        redirect_target.to_string()
    }
}
