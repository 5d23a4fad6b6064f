pub mod cafe;

pub use cafe::{amenity_label, Cafe, CafeRow, NewCafe};
