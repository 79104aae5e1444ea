#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod error;
pub use error::*;

pub mod navigation;
pub mod route_definition;

mod router;
pub use router::*;

mod router_cfg;
pub use router_cfg::RouterConfig;

mod view;
pub use view::*;

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::error::*;
    pub use crate::navigation::*;
    pub use crate::route_definition::*;
    pub use crate::router::*;
    pub use crate::router_cfg::RouterConfig;
    pub use crate::view::*;
    pub use calendar_history::{History, HistoryMode, MemoryHistory};
}
