pub use db::*;
pub use password_resets::*;
pub use preferences::*;
pub use saved_books::*;
pub use users::*;

mod db;
mod password_resets;
mod preferences;
mod saved_books;
mod users;
