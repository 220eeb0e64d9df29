mod log_level;
mod print_mode;

pub use log_level::LogLevel;
pub use print_mode::PrintMode;
