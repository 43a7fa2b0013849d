pub mod deck_handlers;
pub mod ui_handlers;
pub mod ws;
