pub mod core_api;
pub mod game_mode;
pub mod header;
pub mod layout;
pub mod query;
pub mod reader;
pub mod sacrifice;

pub use core_api::decode;
