//! Reconstructed file hierarchy for display.

pub mod model;
pub mod node;

pub use model::FileTree;
pub use node::TreeNode;
