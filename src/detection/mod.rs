pub mod charset;
pub mod delimiter;
pub mod kind;

pub use charset::{convert_to_utf8, detect_charset, is_binary_data};
pub use delimiter::{count_fields, detect_delimiter};
pub use kind::detect_column_kind;
