//! Client for the CloudLogger service.
//!
//! ```no_run
//! use cloudlogger::{LogClient, LogRow};
//!
//! # async fn run() -> cloudlogger::Result<()> {
//! let client = LogClient::initialize("your_project_secret", false)?;
//! let row = LogRow::new()
//!     .with("Date", "22-10-1994")
//!     .with("Country", "Netherlands");
//! client.log(&row, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod item;
pub mod logging;
pub mod response;
pub mod wire;

// Re-export commonly used types
pub use client::LogClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{LogError, Result};
pub use item::{LogItem, LogRow, LogValue};
pub use response::ResponseCode;
pub use wire::WireContract;
