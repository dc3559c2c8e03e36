mod gem_data;
mod provider;

pub use gem_data::GemData;
pub use provider::Provider;
