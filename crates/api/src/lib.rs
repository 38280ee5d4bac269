//! HTTP layer for the stock list screens: routing, form binding, views,
//! redirects and flash messages.

pub mod app;
pub mod config;
pub mod middleware;
