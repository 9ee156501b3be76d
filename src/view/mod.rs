pub mod route;
pub mod state;
pub mod validate;
