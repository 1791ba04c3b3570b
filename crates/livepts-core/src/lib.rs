pub mod config;
pub mod emitter;
pub mod error;
pub mod id;
pub mod parser;

pub use config::ListConfig;
pub use emitter::{emit_point, emit_points};
pub use error::ParseError;
pub use id::AttrName;
pub use parser::{is_item_separator, parse_point, parse_points};

// Re-export the point type so downstream crates don't need a direct kurbo dependency
pub use kurbo::Point;
