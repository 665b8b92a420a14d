//! Newsletter subscribers.

use crate::rest::Resource;

/// Collection name of subscribers.
pub const SUBSCRIBERS: &str = "subscribers";

/// Returns the subscribers resource (`subscriber_id`, object `subscriber`).
#[must_use]
pub fn subscribers() -> Resource {
    Resource::new(SUBSCRIBERS, "subscriber_id").with_object_name("subscriber")
}
