pub mod emit;
pub mod error;
pub mod generate;
pub mod header;
pub mod options;
pub mod resolve;
pub mod table;
