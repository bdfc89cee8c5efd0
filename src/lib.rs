//! Minigit is a local, content-addressable object store: the foundation
//! layer of a simplified version-control tool.
//!
//! Given arbitrary byte content, it computes a stable 32-hex-digit digest
//! and persists the content under that digest inside a `.minigit` folder,
//! such that the same content can later be retrieved by digest alone.
//!
//! Higher-level version-control features (trees, commits, branches,
//! merges) would be built on top of this store as separate components and
//! are intentionally not part of this crate.

#![deny(warnings)]

pub mod object;
pub mod repo;

#[cfg(feature = "clap")]
pub mod cli;
