//! HTTP API
//!
//! Stateless JSON service over the ROI use cases:
//!
//! | route | handler |
//! |---|---|
//! | `GET /health` | [`handlers::health`] |
//! | `POST /api/simulator/calculate` | [`handlers::calculate`] |
//! | `GET /api/simulator/benchmarks` | [`handlers::benchmarks`] |
//! | `GET /api/simulator/sectors` | [`handlers::sectors`] |

pub mod cors;
pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use rate_limit::RateLimiter;
pub use response::ApiResponse;
pub use server::{AppState, create_router, serve};
