mod json_loader;
mod schema;

pub use json_loader::{load_chat_data, load_context_data, load_json_file, ContextRecord};
pub use schema::{chat_shape_ok, context_shape_ok};
