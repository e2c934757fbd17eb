pub mod client;
pub mod declarations;
pub mod dto;
pub mod handler;
pub mod service;

pub use client::{TimeSource, WorldTimeClient};
pub use declarations::AppDeclarations;
pub use dto::TimeLookupResult;
pub use handler::{handle_bindings, handle_healthcheck, handle_icon, handle_manifest, handle_send};
pub use service::DatetimeService;
