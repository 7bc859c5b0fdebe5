pub mod chat;
pub mod initdb;
pub mod seed;

pub use chat::chat;
pub use initdb::init_database;
pub use seed::seed;
