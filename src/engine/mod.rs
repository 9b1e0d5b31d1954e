pub mod actor;
pub use actor::*;

pub mod batch;
pub use batch::*;

pub mod client;
pub use client::*;

pub mod game;
pub use game::*;

pub mod reply;
pub use reply::*;

pub mod server;
pub use server::*;
