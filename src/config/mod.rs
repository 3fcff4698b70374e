mod loader;
mod model;

pub use loader::{DEFAULT_RUBRIC_FILE, load_rubric};
pub use model::Rubric;
