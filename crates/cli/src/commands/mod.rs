pub mod analyze;
pub mod scan;
pub mod signatures;

pub use analyze::*;
pub use scan::*;
pub use signatures::*;
