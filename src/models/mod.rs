//! Domain models for Tracklet.
//!
//! There is exactly one entity: [`Task`], a short text item with a name, a
//! description, and a three-state [`TaskStatus`]. Tasks are owned by the
//! engine's in-memory collection; the store only ever sees full snapshots
//! to serialize.
//!
//! Mutations arrive as input structs ([`CreateTaskInput`],
//! [`UpdateTaskInput`]) so that validation can run against the payload
//! before anything in the collection is touched.

mod task;

pub use task::*;
