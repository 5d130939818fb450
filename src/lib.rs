//! Tracklet: a local task tracker backed by a single JSON file.
//!
//! The crate is split along one seam: the [`engine`] owns the in-memory
//! collection and all mutation rules, and the [`store`] turns full
//! snapshots of that collection into bytes on disk. The CLI binary is
//! thin glue that parses arguments and renders results; everything with a
//! behavior worth testing lives behind [`engine::TaskEngine`].

pub mod engine;
pub mod error;
pub mod models;
pub mod store;
pub mod validate;
