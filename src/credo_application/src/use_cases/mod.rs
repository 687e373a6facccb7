pub mod activate_user;
pub mod change_password;
pub mod create_user;
pub mod delete_user;
pub mod federated_sign_in;
pub mod find_user;
pub mod refresh_token;
pub mod resend_activation_code;
pub mod reset_password;
pub mod reset_password_request;
pub mod sign_in;
pub mod sign_out;
pub mod validate_token;

pub use activate_user::ActivateUserUseCase;
pub use change_password::ChangePasswordUseCase;
pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use federated_sign_in::FederatedSignInUseCase;
pub use find_user::FindUserUseCase;
pub use refresh_token::RefreshTokenUseCase;
pub use resend_activation_code::ResendActivationCodeUseCase;
pub use reset_password::ResetPasswordUseCase;
pub use reset_password_request::ResetPasswordRequestUseCase;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use validate_token::ValidateTokenUseCase;
