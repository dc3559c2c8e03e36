mod client;
mod hosting_data;
mod provider;

pub use hosting_data::HostingData;
pub use provider::{ACCESS_TOKEN_ENV_VAR, Provider};
