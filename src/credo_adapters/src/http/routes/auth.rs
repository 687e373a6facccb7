use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use super::error::ApiError;

pub type BearerHeader = TypedHeader<Authorization<Bearer>>;

/// Pulls the raw token out of an optional `Authorization: Bearer` header.
pub fn bearer_token(header: &Option<BearerHeader>) -> Result<&str, ApiError> {
    header
        .as_ref()
        .map(|TypedHeader(Authorization(bearer))| bearer.token())
        .ok_or(ApiError::MissingToken)
}
