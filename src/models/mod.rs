pub mod adapter;
pub mod processing_unit_metadata;

pub use self::adapter::*;
pub use self::processing_unit_metadata::*;
