//! Git integration
//!
//! The hook talks to git exclusively through the porcelain CLI; the only
//! operation it needs is listing the paths staged for the next commit.

pub mod staged;

pub use staged::{GitError, GitIndex};
