//! Error types for the scoring store.

use snipes_types::{GroupId, PlayerId, SnipeId};

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No group with this id exists.
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),

    /// The player is not a member of the group.
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// No snipe with this id exists.
    #[error("snipe not found: {0}")]
    SnipeNotFound(SnipeId),

    /// A counter or point total left its representable range.
    #[error("arithmetic overflow in score calculation")]
    ArithmeticOverflow,
}
