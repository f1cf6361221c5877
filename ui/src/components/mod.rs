pub mod form_fields;
pub mod shell;

pub use form_fields::*;
pub use shell::*;
