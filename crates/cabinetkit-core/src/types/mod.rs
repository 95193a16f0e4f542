//! Cabinet geometry and construction types.
//!
//! ## Modules
//!
//! - [`dimensions`]: Overall box dimensions and their validation
//! - [`style`]: Cabinet type, construction style and door style enums

pub mod dimensions;
pub mod style;

pub use dimensions::Dimensions;
pub use style::{CabinetStyle, CabinetType, DoorStyle};
