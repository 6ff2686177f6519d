//! Common ID Types
//!
//! Type-safe ID wrappers for backend entities. The backend hands out plain
//! integer ids; the wrapper keeps ids of different entities from being mixed.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::new(42);
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a backend-issued id
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

// Manual serde impls: derive would put bounds on the marker type.
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for user account IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct User;

    /// Marker for job-seeker profile IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct JobSeeker;

    /// Marker for employer profile IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Employer;

    /// Marker for job listing IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct JobListing;

    /// Marker for application IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Application;

    /// Marker for resume IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Resume;

    /// Marker for notification IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Notification;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type JobSeekerId = Id<markers::JobSeeker>;
pub type EmployerId = Id<markers::Employer>;
pub type JobListingId = Id<markers::JobListing>;
pub type ApplicationId = Id<markers::Application>;
pub type ResumeId = Id<markers::Resume>;
pub type NotificationId = Id<markers::Notification>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::new(1);
        let seeker_id: JobSeekerId = Id::new(1);

        // These are different types, cannot be mixed
        let _u: i64 = user_id.value();
        let _s: i64 = seeker_id.value();
    }

    #[test]
    fn test_id_from_i64() {
        let id: UserId = 42.into();
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: EmployerId = Id::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");

        let parsed: EmployerId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id: UserId = Id::new(9);
        assert_eq!(id.to_string(), "9");
        assert_eq!(format!("{id:?}"), "Id(9)");
    }
}
