pub mod assembler;
pub mod proposer;
