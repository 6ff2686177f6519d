//! Typed wrappers over the backend REST surface
//!
//! One module per resource. DTOs are `camelCase` on the wire (the backend
//! is a Jackson-serialized Java service); unknown response fields are
//! ignored, so these structs only carry what the client consumes.

pub mod applications;
pub mod auth;
pub mod employers;
pub mod joblistings;
pub mod jobseekers;
pub mod notifications;
pub mod resumes;
pub mod users;
