mod api;
mod category;
mod order;
mod order_line;
mod product;
mod user;
mod user_order;

pub use self::api::ApiResponse;
pub use self::category::CategoryResponse;
pub use self::order::{OrderResponse, STATUS_UNAVAILABLE};
pub use self::order_line::OrderLineResponse;
pub use self::product::{ProductResponse, UNCATEGORIZED};
pub use self::user::UserResponse;
pub use self::user_order::UserOrderResponse;
