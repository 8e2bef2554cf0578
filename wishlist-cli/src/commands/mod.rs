//! CLI command implementations.
//!
//! - `add_user`: Register a user
//! - `show_user`: Look up a user by email or id
//! - `add_item`: Put an item on the wishlist
//! - `delete_item`: Remove one of your own items
//! - `list`: Show the wishlist as seen by one user
//! - `reserve`: Reserve an item
//! - `unreserve`: Give up a reservation
//! - `owner`: Show who holds a reservation
//! - `verify`: Check store integrity
//! - `completions`: Generate shell completion scripts

pub mod add_item;
pub mod add_user;
pub mod completions;
pub mod delete_item;
pub mod list;
pub mod owner;
pub mod reserve;
pub mod show_user;
pub mod unreserve;
pub mod verify;

pub use add_item::AddItemCommand;
pub use add_user::AddUserCommand;
pub use completions::CompletionsCommand;
pub use delete_item::DeleteItemCommand;
pub use list::ListCommand;
pub use owner::OwnerCommand;
pub use reserve::ReserveCommand;
pub use show_user::ShowUserCommand;
pub use unreserve::UnreserveCommand;
pub use verify::VerifyCommand;
