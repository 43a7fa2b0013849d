//! Markdown slide decks served to the browser, with presenter sync.
//!
//! [`deck`] turns a Markdown document into slides, [`store`] holds the
//! current deck, and [`sync`] fans reloads and navigation out to every
//! connected viewer.

pub mod app;
pub mod config;
pub mod deck;
pub mod errors;
pub mod handlers;
pub mod store;
pub mod sync;
