//! Shared DTO types used across multiple endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::User;

/// Public profile of the signed-in user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    /// User identifier.
    pub id: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Connected wallet address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    /// Whether the account passed verification.
    pub is_verified: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            wallet_address: user.wallet_address,
            is_verified: user.is_verified,
        }
    }
}

/// Response body for the `/auth` endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Whether a user is signed in.
    pub is_authenticated: bool,
    /// The signed-in user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

impl SessionResponse {
    /// Builds the response from the current session user.
    #[must_use]
    pub fn from_user(user: Option<User>) -> Self {
        Self {
            is_authenticated: user.is_some(),
            user: user.map(UserDto::from),
        }
    }
}

/// Generic list wrapper for read-only collections.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T: ToSchema> {
    /// Items, in display order.
    pub data: Vec<T>,
}
