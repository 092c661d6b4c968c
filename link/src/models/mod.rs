//! Data models for the tienda-link client library.
//!
//! Defines the response envelope and the request/response payloads for
//! every resource the back office exposes.

pub mod attendance;
pub mod envelope;
pub mod order;
pub mod product;
pub mod report;
pub mod stock;
pub mod user;

pub use attendance::{Attendance, AttendanceEvent, AttendanceQuery, ClockRequest};
pub use envelope::{ApiEnvelope, ErrorBody, Pagination};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus};
pub use product::{NewProduct, Product, ProductFilter, ProductUpdate};
pub use report::{
    AttendanceReport, EmployeeAttendance, ProductSales, ReportRange, SalesByDate, SalesReport,
    StockByCategory, StockLevel, StockReport, StockReportItem,
};
pub use stock::{QuantityUpdate, Stock, StockAdjustment};
pub use user::{AuthResponse, LoginRequest, RefreshRequest, RegisterUserRequest, User, UserRole};
