//! HTTP API module for the Work Schedule Engine.
//!
//! This module exposes schedule definition, exception editing and
//! date-range resolution as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ScheduleQuery, TimeIntervalRequest};
pub use response::{ApiError, ApiErrorResponse, ScheduleResponse};
pub use state::AppState;
