//! Symmetric timing for recursively nested shapes.

pub(crate) mod timing;
pub(crate) mod tree;
