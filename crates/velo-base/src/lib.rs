pub mod clock;
pub mod logging;
pub mod poll;

pub use clock::{format_rfc3339, format_timestamp, format_today};
pub use logging::{init_file_logger, init_stdout_logger, FileLogger, StdoutLogger};
pub use poll::poll_until;

// Re-export log so downstream crates can use velo_base::log::*
pub use log;
