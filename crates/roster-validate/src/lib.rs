pub mod dates;
pub mod email;
pub mod phone;

pub use dates::{is_valid_date, parse_date};
pub use email::is_valid_email;
pub use phone::is_valid_phone;
