//! # Receipt API
//!
//! HTTP server that scores retail receipts and serves their points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API                                     │
//! │                                                                         │
//! │  ┌────────────────────┐  ┌────────────────────┐  ┌──────────────────┐  │
//! │  │  routes            │  │  receipt-core      │  │  store           │  │
//! │  │                    │  │                    │  │                  │  │
//! │  │ • POST /receipts/  │─►│ • validate_receipt │  │ • ReceiptStore   │  │
//! │  │   process          │  │ • breakdown        │  │ • InMemory...    │  │
//! │  │ • GET /receipts/   │  └────────────────────┘  │   (RwLock<Map>)  │  │
//! │  │   {id}/points      │─────────────────────────►│                  │  │
//! │  │ • GET /health      │  ┌────────────────────┐  └──────────────────┘  │
//! │  │                    │─►│  ids               │                        │
//! │  └────────────────────┘  │ • UuidGenerator    │                        │
//! │                          └────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 3000)
//! - `BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `RUST_LOG` - Tracing filter (default: info)

pub mod config;
pub mod error;
pub mod ids;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
