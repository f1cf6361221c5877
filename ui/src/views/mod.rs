pub mod categories;
pub mod entries;
pub mod not_found;

pub use categories::*;
pub use entries::*;
pub use not_found::*;
