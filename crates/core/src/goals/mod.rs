pub mod resolver;
pub mod settings;
pub mod static_tables;
pub mod table;
