//! Disappearing Messages - normalized conversation expiration-timer state

mod config;
mod constants;
mod token;

pub use config::DisappearingMessagesConfig;
pub use constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK};
pub use token::TimerToken;
