//! Unified error codes for the FrontDash backend
//!
//! This module defines all error codes used across the server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 3xxx: Restaurant errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 8xxx: Personnel errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Account is inactive
    AccountInactive = 1003,

    // ==================== 3xxx: Restaurant ====================
    /// Restaurant not found
    RestaurantNotFound = 3001,
    /// Restaurant has not been approved
    RestaurantNotApproved = 3002,
    /// Restaurant name already registered
    RestaurantNameExists = 3003,
    /// No pending withdrawal request for restaurant
    WithdrawalNotRequested = 3004,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order item does not belong to restaurant menu
    InvalidOrderItem = 4002,
    /// Order is empty
    OrderEmpty = 4003,
    /// Tip amount is invalid
    InvalidTip = 4004,
    /// Item quantity is invalid
    InvalidQuantity = 4005,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Day of week not recognized
    HoursInvalidDay = 6101,

    // ==================== 8xxx: Personnel ====================
    /// Staff member not found
    StaffNotFound = 8001,
    /// Staff username already exists
    StaffUsernameExists = 8002,
    /// Driver not found
    DriverNotFound = 8101,
    /// Driver name already exists
    DriverNameExists = 8102,
    /// Driver is not available
    DriverNotAvailable = 8103,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::AccountInactive => "Account is inactive",

            // Restaurant
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::RestaurantNotApproved => "Restaurant has not been approved",
            ErrorCode::RestaurantNameExists => "Restaurant name already registered",
            ErrorCode::WithdrawalNotRequested => "Restaurant has no pending withdrawal request",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidOrderItem => "Order contains items not on the restaurant menu",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::InvalidTip => "Tip amount is invalid",
            ErrorCode::InvalidQuantity => "Item quantity is invalid",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::HoursInvalidDay => "Day of week not recognized",

            // Personnel
            ErrorCode::StaffNotFound => "Staff member not found",
            ErrorCode::StaffUsernameExists => "Staff username already exists",
            ErrorCode::DriverNotFound => "Driver not found",
            ErrorCode::DriverNameExists => "Driver name already exists",
            ErrorCode::DriverNotAvailable => "Driver is not available",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::AccountInactive),

            // Restaurant
            3001 => Ok(ErrorCode::RestaurantNotFound),
            3002 => Ok(ErrorCode::RestaurantNotApproved),
            3003 => Ok(ErrorCode::RestaurantNameExists),
            3004 => Ok(ErrorCode::WithdrawalNotRequested),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidOrderItem),
            4003 => Ok(ErrorCode::OrderEmpty),
            4004 => Ok(ErrorCode::InvalidTip),
            4005 => Ok(ErrorCode::InvalidQuantity),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6101 => Ok(ErrorCode::HoursInvalidDay),

            // Personnel
            8001 => Ok(ErrorCode::StaffNotFound),
            8002 => Ok(ErrorCode::StaffUsernameExists),
            8101 => Ok(ErrorCode::DriverNotFound),
            8102 => Ok(ErrorCode::DriverNameExists),
            8103 => Ok(ErrorCode::DriverNotAvailable),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
