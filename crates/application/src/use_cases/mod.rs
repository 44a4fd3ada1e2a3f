//! Application use cases (business logic orchestration).

mod transform_collection_file;

pub use transform_collection_file::*;
