//! Report-to-chart normalization.

pub mod area;
pub mod global;

pub use self::area::{area_view, AreaView};
pub use self::global::global_trend;
