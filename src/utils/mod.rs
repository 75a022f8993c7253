pub mod parameter_error_handler;
pub mod path_segment;

pub use parameter_error_handler::{json_error_handler, path_error_handler, query_error_handler};
pub use path_segment::validate_path_segment;
