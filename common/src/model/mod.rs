pub mod lead;
pub mod site_config;
