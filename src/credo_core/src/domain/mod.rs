pub mod code;
pub mod email;
pub mod error_kind;
pub mod events;
pub mod password;
pub mod role;
pub mod token;
pub mod user;
pub mod user_id;
