pub mod controller;
pub mod fade;
