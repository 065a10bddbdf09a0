pub mod toml_loader;

pub use toml_loader::{load_form_preset, parse_form_preset, FormPreset};
