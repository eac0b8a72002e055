//! Canonical viewer identity record.
//!
//! Identity platforms hand us either a mapping (OIDC claims, userinfo JSON)
//! or per-field lookups (proxy headers). Both are converted here, once, so
//! the resolver only ever reads typed optional fields.

use crate::IdentityField;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Read-only snapshot of the signed-in viewer as reported by the platform.
/// Every field is optional; empty strings and falsy values are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewerIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_logged_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "primaryEmail", skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unrecognised source entries, kept for the account-details view only
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl ViewerIdentity {
    /// Build from a mapping-style source such as verified ID token claims.
    ///
    /// Strings are kept as-is, non-zero numbers become text, and booleans only
    /// feed `is_logged_in`. Null, empty, zero, arrays and objects count as absent.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Self {
        let mut identity = Self::default();

        for (key, value) in mapping {
            match IdentityField::from_key(key) {
                Some(IdentityField::IsLoggedIn) => {
                    identity.is_logged_in = flag_from_value(value);
                }
                Some(field) => {
                    if let Some(text) = text_from_value(value) {
                        identity.set_text(field, text);
                    }
                }
                None => {
                    identity.extra.insert(key.clone(), value.clone());
                }
            }
        }

        identity
    }

    /// Build from an attribute-style source that can be asked for one field
    /// at a time, e.g. proxy headers.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(IdentityField) -> Option<String>,
    {
        IdentityField::ALL
            .into_iter()
            .fold(Self::default(), |identity, field| match lookup(field) {
                Some(raw) => identity.with(field, raw),
                None => identity,
            })
    }

    /// Builder-style setter. Empty text is ignored; `IsLoggedIn` parses the
    /// text as a flag.
    pub fn with(mut self, field: IdentityField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            IdentityField::IsLoggedIn => self.is_logged_in = parse_flag(&value),
            _ if value.is_empty() => {}
            _ => self.set_text(field, value),
        }
        self
    }

    pub fn with_logged_in(mut self, logged_in: bool) -> Self {
        self.is_logged_in = Some(logged_in);
        self
    }

    /// Non-empty value of a field, if any. `IsLoggedIn` reads as `"true"`
    /// only when the flag is set; a false flag is absent, like an empty string.
    pub fn value(&self, field: IdentityField) -> Option<&str> {
        let slot = match field {
            IdentityField::IsLoggedIn => {
                return self.is_logged_in.filter(|flag| *flag).map(|_| "true");
            }
            IdentityField::Name => &self.name,
            IdentityField::FullName => &self.full_name,
            IdentityField::DisplayName => &self.display_name,
            IdentityField::Email => &self.email,
            IdentityField::PrimaryEmail => &self.primary_email,
            IdentityField::Sub => &self.sub,
            IdentityField::Username => &self.username,
            IdentityField::User => &self.user,
            IdentityField::UserId => &self.user_id,
            IdentityField::Id => &self.id,
        };
        slot.as_deref().filter(|text| !text.is_empty())
    }

    fn set_text(&mut self, field: IdentityField, text: String) {
        let slot = match field {
            IdentityField::IsLoggedIn => return,
            IdentityField::Name => &mut self.name,
            IdentityField::FullName => &mut self.full_name,
            IdentityField::DisplayName => &mut self.display_name,
            IdentityField::Email => &mut self.email,
            IdentityField::PrimaryEmail => &mut self.primary_email,
            IdentityField::Sub => &mut self.sub,
            IdentityField::Username => &mut self.username,
            IdentityField::User => &mut self.user,
            IdentityField::UserId => &mut self.user_id,
            IdentityField::Id => &mut self.id,
        };
        *slot = Some(text);
    }
}

fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn flag_from_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => parse_flag(s),
        _ => None,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
