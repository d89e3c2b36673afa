//! Physical rooms: housekeeping status, assignment and key cards

pub mod error;
pub mod housekeeping;
pub mod key_card;

pub use error::{RoomError, RoomResult};
pub use housekeeping::{
    RoomStatusSummary, allowed_room_targets, assign_room, can_change_room_status,
    change_room_status, find_available_room, release_room, room_status_summary,
};
pub use key_card::issue_key_card;
