//! Typed resource clients, one per backend entity.
//!
//! Each method performs exactly one HTTP call, unwraps the response
//! envelope, and fails with the envelope's own error message when present,
//! else a domain default. Mutations perform no optimistic local state
//! change; callers refetch.

pub mod attendance;
pub mod auth;
pub mod orders;
pub mod products;
pub mod reports;
pub mod stock;
pub mod users;

pub use attendance::AttendanceApi;
pub use auth::AuthApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use reports::ReportsApi;
pub use stock::StockApi;
pub use users::UsersApi;
