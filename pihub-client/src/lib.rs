//! Client for the Raspberry Pi device control API.
//!
//! The device exposes three capabilities, each modelled as its own trait so
//! the adapter can depend on exactly the one it drives:
//! - [`StatusProbe`]: `GET /status`
//! - [`ActionSender`]: `POST /action`, an immediate name/value action
//! - [`ScheduleSender`]: `POST /schedules` and `DELETE /schedules/{name}`
//!
//! [`RaspberryPiClient`] implements all three over HTTP.

mod client;
mod error;
mod model;
mod sender;

pub use client::{PiClientConfig, RaspberryPiClient};
pub use error::{ClientError, ClientResult};
pub use model::{PiAction, PiSchedule, PiStatus};
pub use sender::{ActionSender, ScheduleSender, StatusProbe};
