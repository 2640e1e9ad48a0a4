//! Market data models
//!
//! - `profile` - Resolved ticker identity (TickerProfile)
//! - `price` - Monthly closing-price observations (PricePoint)

mod price;
mod profile;

pub use price::PricePoint;
pub use profile::TickerProfile;
