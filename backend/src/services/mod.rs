pub mod site_config;
