pub mod entities;
pub mod errors;
pub mod ledger;
pub mod merkle;

pub use entities::*;
pub use errors::*;
pub use ledger::*;
pub use merkle::*;
