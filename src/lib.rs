pub mod config;
pub mod note;
pub mod output;
pub mod pitch;
pub mod tables;
pub mod wavetable;
