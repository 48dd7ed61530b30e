pub mod chain;
pub mod entities;
pub mod errors;
