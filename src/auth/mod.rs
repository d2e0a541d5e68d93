pub mod csrf;
pub mod login;
pub mod middleware;
pub mod session;
