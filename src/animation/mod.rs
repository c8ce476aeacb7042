pub mod accel;
pub mod ambient;
pub mod oscillator;
