pub mod debounce;
pub mod solver;
