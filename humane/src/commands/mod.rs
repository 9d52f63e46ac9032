/// Digit grouping command
pub mod comma;

/// Byte size command
pub mod size;

/// Magnitude table command
pub mod table;

/// Relative time commands (age, rel)
pub mod time;

/// Version command handlers
pub mod version;
