pub mod offer;
pub mod product;
pub mod status;

pub use offer::*;
pub use product::*;
pub use status::*;
