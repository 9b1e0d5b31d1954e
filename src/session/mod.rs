pub mod human;
pub use human::*;

pub mod lobby;
pub use lobby::*;

pub mod mailbox;
pub use mailbox::*;

pub mod session;
pub use session::*;
