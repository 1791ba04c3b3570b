pub mod animated_points;
pub mod error;
pub mod host;
pub mod item;
pub mod list;
pub mod notify;

mod anim_list;
mod base_list;

pub use animated_points::AnimatedPoints;
pub use error::{LiveAttributeError, Result};
pub use host::{AttributeHost, Element};
pub use item::PointItem;
pub use list::{ListKind, PointList};
pub use notify::Subscription;

// Re-export core types so downstream crates don't need a direct dependency
pub use livepts_core::{AttrName, ListConfig, Point};
