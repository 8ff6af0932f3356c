//! Collaborator interfaces the pipeline writes to.

pub mod store;
