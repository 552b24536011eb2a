//! Provides clients for interacting with the external APIs.
//!
//! Includes:
//! - `posts`: Client for the dummyjson social-post feed.
//! - `weather`: Client for the OpenWeather current-weather API.
//! - `news`: Client for the NewsAPI top-headlines API.
//!
//! The clients are independent of one another; each wraps exactly one upstream
//! endpoint behind a single typed fetch method.

mod news;
mod posts;
mod weather;

#[cfg(test)]
mod news_test;
#[cfg(test)]
mod posts_test;

pub use news::*;
pub use posts::*;
pub use weather::*;
