use std::fmt;

use serde::Serialize;

/// Identity fields the resolver recognises, with the key each one
/// carries in mapping-style sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum IdentityField {
    #[serde(rename = "is_logged_in")]
    IsLoggedIn,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "full_name")]
    FullName,
    #[serde(rename = "display_name")]
    DisplayName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "primaryEmail")]
    PrimaryEmail,
    #[serde(rename = "sub")]
    Sub,
    #[serde(rename = "username")]
    Username,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "user_id")]
    UserId,
    #[serde(rename = "id")]
    Id,
}

impl IdentityField {
    pub const ALL: [IdentityField; 11] = [
        IdentityField::IsLoggedIn,
        IdentityField::Name,
        IdentityField::FullName,
        IdentityField::DisplayName,
        IdentityField::Email,
        IdentityField::PrimaryEmail,
        IdentityField::Sub,
        IdentityField::Username,
        IdentityField::User,
        IdentityField::UserId,
        IdentityField::Id,
    ];

    /// Key used by mapping-style sources (claims, userinfo JSON)
    pub fn key(&self) -> &'static str {
        match self {
            IdentityField::IsLoggedIn => "is_logged_in",
            IdentityField::Name => "name",
            IdentityField::FullName => "full_name",
            IdentityField::DisplayName => "display_name",
            IdentityField::Email => "email",
            IdentityField::PrimaryEmail => "primaryEmail",
            IdentityField::Sub => "sub",
            IdentityField::Username => "username",
            IdentityField::User => "user",
            IdentityField::UserId => "user_id",
            IdentityField::Id => "id",
        }
    }

    /// Header suffix used by proxy-style sources, e.g. `X-Forwarded-` + `Email`
    pub fn header_suffix(&self) -> &'static str {
        match self {
            IdentityField::IsLoggedIn => "Logged-In",
            IdentityField::Name => "Name",
            IdentityField::FullName => "Full-Name",
            IdentityField::DisplayName => "Display-Name",
            IdentityField::Email => "Email",
            IdentityField::PrimaryEmail => "Primary-Email",
            IdentityField::Sub => "Sub",
            IdentityField::Username => "Username",
            IdentityField::User => "User",
            IdentityField::UserId => "User-Id",
            IdentityField::Id => "Id",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
