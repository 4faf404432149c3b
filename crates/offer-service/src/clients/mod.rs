pub mod offer_client;
pub mod product_client;
pub mod traits;

pub use offer_client::*;
pub use product_client::*;
pub use traits::*;
