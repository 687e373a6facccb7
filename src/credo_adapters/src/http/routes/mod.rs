pub mod activate_user;
pub mod auth;
pub mod change_password;
pub mod create_user;
pub mod delete_user;
pub mod error;
pub mod refresh_token;
pub mod resend_activation_code;
pub mod reset_password;
pub mod reset_password_request;
pub mod sign_in;
pub mod sign_out;
pub mod validate_token;

pub use activate_user::activate_user;
pub use change_password::{ChangePasswordRequest, change_password};
pub use create_user::{CreateUserRequest, create_user};
pub use delete_user::delete_user;
pub use error::{ApiError, ErrorResponse};
pub use refresh_token::{RefreshTokenRequest, refresh_token};
pub use resend_activation_code::{EmailRequest, MessageResponse, resend_activation_code};
pub use reset_password::{ResetPasswordRequest, reset_password};
pub use reset_password_request::reset_password_request;
pub use sign_in::{SignInRequest, sign_in};
pub use sign_out::sign_out;
pub use validate_token::validate_token;
