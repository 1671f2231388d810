// File I/O operations

pub mod read;
pub mod write;
