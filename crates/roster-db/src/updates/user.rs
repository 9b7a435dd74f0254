//! User update builder.

use serde::{Deserialize, Serialize};

/// Partial user update. Deserializes from a validated `updateUser` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl UserUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }
}

#[derive(Debug, Default)]
pub struct UserUpdateBuilder(UserUpdate);

impl UserUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(UserUpdate::default())
    }

    #[must_use]
    pub fn email(mut self, val: impl Into<String>) -> Self {
        self.0.email = Some(val.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, val: impl Into<String>) -> Self {
        self.0.first_name = Some(val.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, val: impl Into<String>) -> Self {
        self.0.last_name = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> UserUpdate {
        self.0
    }
}
