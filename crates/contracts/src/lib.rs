//! Wire contracts shared between the upload portal frontend and its backend.

pub mod system;
pub mod usecases;
