/// Display string for a set amenity flag
pub const AMENITY_YES: &str = "Yes";

/// Display string for an unset amenity flag
pub const AMENITY_NO: &str = "No";

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Body of the 404 returned when a location search has no matches
pub const MSG_NO_CAFE_AT_LOCATION: &str = "Sorry, we don't have a cafe at that location.";

/// Error message for a lookup by id that found nothing
pub const MSG_CAFE_NOT_FOUND: &str = "Cafe not found";

/// Error message for an insert that collides on name
pub const MSG_DUPLICATE_NAME: &str = "A cafe with that name already exists";

/// Notice shown on the list page after a successful delete
pub const NOTICE_CAFE_DELETED: &str = "Cafe deleted successfully!";

/// Notice shown on the list page when the deleted id did not exist
pub const NOTICE_CAFE_MISSING: &str = "Cafe not found.";
