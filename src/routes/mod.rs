//! HTTP-like route handlers. Each returns an HTML fragment (or JSON) for
//! HTMX to swap into the page.

pub mod game;
pub mod players;
pub mod scores;
pub mod util;
