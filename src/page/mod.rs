pub mod frames;
pub mod model;
#[allow(clippy::module_inception)]
pub mod page;
pub mod story;
