pub mod auth_provider;
pub mod quiz_game;
pub mod site_header;
pub mod toast;
