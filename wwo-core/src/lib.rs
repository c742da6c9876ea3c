//! Client library for the World Weather Online premium API.
//!
//! This crate defines:
//! - A client issuing one request per report (local, marine, ski, past
//!   weather, past marine, search, time zone)
//! - The typed data model of every report and the XML decoder filling it
//! - Configuration & credentials handling
//!
//! ```no_run
//! # async fn demo() -> Result<(), wwo_core::WwoError> {
//! use wwo_core::{Options, WwoClient};
//!
//! let client = WwoClient::new("your-api-key");
//! let mut options = Options::new();
//! options.insert("fx".into(), "no".into());
//!
//! let forecast = client.get_local("London", &options).await.into_result()?;
//! println!("{} °C", forecast.current.temp_c);
//! # Ok(())
//! # }
//! ```
//!
//! It is used by `wwo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod clock;
pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod transport;

pub use client::{Endpoint, Outcome, WwoClient};
pub use clock::{EventTime, HmmTime};
pub use config::Config;
pub use decode::DecodeError;
pub use error::{TransportError, WwoError};
pub use model::{Local, Marine, PastLocal, PastMarine, Report, Search, Ski, TimeZone};
pub use transport::{HttpTransport, Options, Transport};
