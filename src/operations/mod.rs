//! Operations module
//!
//! The rendering pass and its steps: locating resources, fetching the branch
//! list, building the link list and generating the output

pub mod bootstrap;
pub mod branches;
pub mod generate;
pub mod location;
pub mod render;

pub use bootstrap::*;
pub use branches::*;
pub use generate::*;
pub use location::*;
pub use render::*;
