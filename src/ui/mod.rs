//! Console front end: line-based prompts with re-prompt loops, the text menu,
//! and the turn-taking game session built on top of them.

mod console;
pub mod menu;
mod session;

pub use console::{parse_leading_int, Console};
pub use menu::{Bracket, Menu, MenuOption};
pub use session::{ConnectFour, TITLE};
