pub mod app_state;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;

#[cfg(test)]
pub mod test_utils;
