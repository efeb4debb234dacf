pub mod lifetime;
pub mod logging;
