mod category;
mod order;
mod order_line;
mod product;
mod user;
mod user_order;

pub use self::category::CategoryRequest;
pub use self::order::OrderRequest;
pub use self::order_line::OrderLineRequest;
pub use self::product::ProductRequest;
pub use self::user::UserRequest;
pub use self::user_order::UserOrderRequest;
