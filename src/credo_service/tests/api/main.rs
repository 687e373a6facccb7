mod auth;
mod helpers;
mod user;
