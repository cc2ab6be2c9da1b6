pub mod commands;
pub mod outputs;

pub use commands::set_failed;
pub use outputs::OutputWriter;
