pub mod filter;
pub mod grid;
pub mod grouping;
pub mod import;
pub mod log;
pub mod logic;
pub mod persistence;
pub mod selection;
pub mod session;
