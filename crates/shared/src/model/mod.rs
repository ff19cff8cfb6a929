mod category;
mod order;
mod order_line;
mod product;
mod status;
mod user;
mod user_order;

pub use self::category::Category;
pub use self::order::Order;
pub use self::order_line::OrderLine;
pub use self::product::Product;
pub use self::status::{OrderStatus, Status};
pub use self::user::User;
pub use self::user_order::UserOrder;
