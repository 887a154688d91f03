//! Account entity and profile updates.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasknote_core::UserId;
use tasknote_db::{Field, FieldKind, Resource};
use utoipa::ToSchema;

/// A user account. The password digest is never selected into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub nickname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Public face of an account, shown next to comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserSummary {
    pub id: UserId,
    pub nickname: String,
}

/// Columns of [`User`], in `SELECT` order.
pub const USER_COLUMNS: &str = "id, phone_number, nickname, email, created_at";

pub static USER_RESOURCE: Resource = Resource {
    label: "User",
    table: "users",
    id_column: "id",
    owner_column: "id",
    fields: &[
        Field::new("phoneNumber", "phone_number", FieldKind::Phone).with_aliases(&["phone"]),
        Field::new("nickname", "nickname", FieldKind::NonEmptyText),
        Field::new("email", "email", FieldKind::Email),
        Field::new("password", "password", FieldKind::Secret),
    ],
    touch_column: None,
    returning: USER_COLUMNS,
    unique_violation: Some("Phone number or email already in use"),
};

/// Body of `PUT /api/users/me`. Every field is optional; absent or `null`
/// fields keep their stored value.
///
/// Handlers read the raw JSON object and plan against [`USER_RESOURCE`];
/// this type documents the accepted shape.
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    #[serde(rename = "phoneNumber", alias = "phone")]
    #[schema(example = "13800138000")]
    pub phone_number: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for UpdateUserDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserDto")
            .field("phone_number", &self.phone_number)
            .field("nickname", &self.nickname)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
