//! Typed ID aliases for the domain entities.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Volunteer entities.
pub struct Volunteer;

/// Marker type for Event entities.
pub struct Event;

/// Marker type for ParticipationRecord entities (volunteer history rows).
pub struct ParticipationRecord;

/// Marker type for Notification entities.
pub struct Notification;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Volunteer entities.
pub type VolunteerId = Id<Volunteer>;

/// Typed ID for Event entities.
pub type EventId = Id<Event>;

/// Typed ID for ParticipationRecord entities.
pub type HistoryId = Id<ParticipationRecord>;

/// Typed ID for Notification entities.
pub type NotificationId = Id<Notification>;
