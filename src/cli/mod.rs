mod commands;
mod handlers;

pub use commands::{Cli, Commands, LinkAction, LinkCommand};
pub use handlers::{
    handle_ask, handle_link, handle_menu, handle_plan, handle_project, handle_serve,
};
