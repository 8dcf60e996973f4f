//! Route handlers and their request/response DTOs.

mod boards;
mod card_users;
mod cards;
mod lists;
mod system;
mod users;

#[cfg(test)]
mod boards_test;
#[cfg(test)]
mod system_test;

pub use boards::*;
pub use card_users::*;
pub use cards::*;
pub use lists::*;
pub use system::*;
pub use users::*;
