pub mod auth;
pub mod comments;
pub mod notes;
pub mod tasks;
pub mod users;
