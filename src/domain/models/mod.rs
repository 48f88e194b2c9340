mod action;
mod analysis;
mod author;
mod backend;
mod event;
mod loading;
mod message;
mod notice;
mod prompt;
mod reply;
mod session;
mod slash_commands;
mod textarea;

pub use action::*;
pub use analysis::*;
pub use author::*;
pub use backend::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use notice::*;
pub use prompt::*;
pub use reply::*;
pub use session::*;
pub use slash_commands::*;
pub use textarea::*;
