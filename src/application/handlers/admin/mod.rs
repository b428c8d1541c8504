//! Admin query handlers.

mod get_admin_stats;
mod list_businesses;
mod list_participants;

pub use get_admin_stats::{AdminError, GetAdminStatsHandler, GetAdminStatsQuery};
pub use list_businesses::{ListBusinessesHandler, ListBusinessesQuery};
pub use list_participants::{ListParticipantsHandler, ListParticipantsQuery};
