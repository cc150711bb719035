//! Domain layer for the BrewLog client.
//!
//! Core types independent of HTTP, rendering, or terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`brew`]: Brew entity, pre-persistence `NewBrew`, and display rules
//! - [`brew_method`]: Preset brew methods plus free-text "Other"
//! - [`brew_time`]: `MM:SS` brew duration
//!
//! # Examples
//!
//! ```
//! use brewlog::domain::{Brew, BrewTime, NewBrew};
//!
//! let brew = Brew::from_new(1, NewBrew {
//!     bean_type: "Ethiopian".to_string(),
//!     image_url: None,
//!     brew_type: "V60".to_string(),
//!     water_temp: 93.0,
//!     weight_in: 15.0,
//!     weight_out: 250.0,
//!     brew_time: BrewTime::default().to_mm_ss(),
//!     bloom_time: 0,
//!     details: None,
//! });
//! assert_eq!(brew.brew_time, "00:00");
//! ```

pub mod brew;
pub mod brew_method;
pub mod brew_time;
pub mod error;

pub use brew::{
    format_measure, format_time_label, parse_leading_int, parse_measure, Brew, NewBrew,
};
pub use brew_method::BrewMethod;
pub use brew_time::BrewTime;
pub use error::{BrewlogError, Result};
