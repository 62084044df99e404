//! nbe-project: in-memory document model for the node box editor.
//!
//! Contains:
//! - schema (projects, nodes and their boxes)
//! - media (named decoded images attached to a project)
//! - mesh (derived geometry rebuilt by `Project::remesh`)

pub mod media;
pub mod mesh;
pub mod schema;

pub use media::{Image, Media};
pub use mesh::NodeMesh;
pub use schema::*;
