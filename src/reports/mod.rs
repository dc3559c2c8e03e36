//! Rendering of project snapshots for the presentation layer.

mod json;

pub use json::{generate as generate_json, generate_one as generate_json_one};
