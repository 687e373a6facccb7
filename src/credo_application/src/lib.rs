pub mod errors;
pub mod notifications;
pub mod services;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use errors::{AccountError, CredentialError};
pub use notifications::{NotificationDispatcher, NotificationDispatcherBuilder};
pub use services::{AccountService, CredentialService};
pub use use_cases::{
    ActivateUserUseCase, ChangePasswordUseCase, CreateUserUseCase, DeleteUserUseCase,
    FederatedSignInUseCase, FindUserUseCase, RefreshTokenUseCase, ResendActivationCodeUseCase,
    ResetPasswordRequestUseCase, ResetPasswordUseCase, SignInUseCase, SignOutUseCase,
    ValidateTokenUseCase,
};
