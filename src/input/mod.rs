//! Reading locale resources from text and files.
pub mod resource;

pub use resource::{
    key_ranges,
    load_resource_file,
    parse_resource,
};
