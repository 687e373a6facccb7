pub mod env {
    pub const CREDO_ENVIRONMENT_ENV_VAR: &str = "CREDO_ENVIRONMENT";
    pub const CREDO_ENV_PREFIX: &str = "CREDO";
    pub const CREDO_ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_DIR: &str = "config";
pub const BASE_CONFIG_FILE: &str = "base";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";
    pub const SESSION_TTL_SECONDS: u64 = 24 * 60 * 60;
    pub const ACCESS_TTL_SECONDS: i64 = 3 * 60 * 60;
    pub const REFRESH_TTL_SECONDS: i64 = 24 * 60 * 60;

    pub mod email_client {
        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const SENDER: &str = "no-reply@credo.local";
        pub const TIMEOUT_MILLIS: u64 = 10_000;
    }

    pub mod links {
        pub const ACTIVATION_URL: &str = "http://localhost:3000/api/user/activate";
        pub const RESET_PASSWORD_URL: &str = "http://localhost:8080/reset-password";
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret";

    pub mod email_client {
        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT_MILLIS: u64 = 200;
    }
}
