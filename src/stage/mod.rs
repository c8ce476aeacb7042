pub mod backend;
pub mod memory;
