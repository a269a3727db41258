/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod data;
pub mod error;
pub mod guild;
pub mod player;
pub mod signature;
pub mod stats;

pub use error::{ComlinkError, DomainError, Result, TransportError};
pub use signature::{Clock, FixedClock, RequestSigner, SystemClock};

pub use client::ComlinkClient;
