pub mod config;
pub mod discovery;
pub mod error;
pub mod pairing;
pub mod plot;
pub mod result;
pub mod summary;
pub mod util;
