//! File tree reconstruction.

pub mod builder;
pub mod service;

pub use builder::TreeBuilder;
pub use service::TreeService;
