//! Listing-domain data types.

mod listing;
mod utility;

pub use listing::Listing;
pub use utility::{LabelVariant, UtilityStatus};
