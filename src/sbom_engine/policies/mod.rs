mod gost_levels;

pub use gost_levels::{GostAttribute, GostLevel, GostValue, GOST_PROPERTY_PREFIX};
