/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public comlink client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;
pub mod types;

pub use config::ClientConfig;

// Re-export commonly used types from http
pub use http::{
    Clock,
    ComlinkClient,
    ComlinkError,
    DomainError,
    FixedClock,
    RequestSigner,
    Result,
    SystemClock,
    TransportError,
};

// Re-export all types
pub use types::*;
