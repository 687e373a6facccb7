use axum::{
    Router,
    extract::FromRef,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use credo_adapters::{
    config::AllowedOrigins,
    http::routes::{
        activate_user, change_password, create_user, delete_user, refresh_token,
        resend_activation_code, reset_password, reset_password_request, sign_in, sign_out,
        validate_token,
    },
};
use credo_application::{AccountService, CredentialService};
use credo_core::{PasswordHasher, RefreshSessionStore, TokenIssuer, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Router state. Each route extracts only the service it needs.
#[derive(Clone)]
pub struct AppState<U, H, T, R> {
    pub credentials: CredentialService<U, H, T, R>,
    pub accounts: AccountService<U, H>,
}

impl<U: Clone, H: Clone, T: Clone, R: Clone> FromRef<AppState<U, H, T, R>>
    for CredentialService<U, H, T, R>
{
    fn from_ref(state: &AppState<U, H, T, R>) -> Self {
        state.credentials.clone()
    }
}

impl<U: Clone, H: Clone, T: Clone, R: Clone> FromRef<AppState<U, H, T, R>>
    for AccountService<U, H>
{
    fn from_ref(state: &AppState<U, H, T, R>) -> Self {
        state.accounts.clone()
    }
}

impl<U: Clone, H: Clone, T: Clone, R: Clone> FromRef<AppState<U, H, T, R>>
    for (CredentialService<U, H, T, R>, AccountService<U, H>)
{
    fn from_ref(state: &AppState<U, H, T, R>) -> Self {
        (state.credentials.clone(), state.accounts.clone())
    }
}

/// HTTP front of the credential and account services
pub struct CredoService {
    router: Router,
}

impl CredoService {
    /// Create a new CredoService over the two application services
    ///
    /// # Arguments
    /// * `credentials` - Sign-in and token lifecycle
    /// * `accounts` - Account lifecycle
    pub fn new<U, H, T, R>(
        credentials: CredentialService<U, H, T, R>,
        accounts: AccountService<U, H>,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
        R: RefreshSessionStore + Clone + 'static,
    {
        let state = AppState {
            credentials,
            accounts,
        };

        let api = Router::new()
            .route("/auth/sign-in", post(sign_in::<U, H, T, R>))
            .route("/auth/refresh-token", post(refresh_token::<U, H, T, R>))
            .route("/auth/sign-out", post(sign_out::<U, H, T, R>))
            .route("/auth/validate-token", get(validate_token::<U, H, T, R>))
            .route(
                "/user",
                post(create_user::<U, H>).delete(delete_user::<U, H, T, R>),
            )
            .route("/user/activate/{email}/{code}", get(activate_user::<U, H>))
            .route(
                "/user/resend-activation-code",
                post(resend_activation_code::<U, H>),
            )
            .route(
                "/user/reset-password-request",
                post(reset_password_request::<U, H>),
            )
            .route("/user/reset-password", post(reset_password::<U, H>))
            .route("/user/change-password", post(change_password::<U, H>))
            .with_state(state);

        let router = Router::new().nest("/api", api);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the CredoService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn into_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Credo service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
