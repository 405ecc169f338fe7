pub mod bootstrap;
pub mod branch;
