use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Status {
    pub id: i32,
    pub name: String,
}

/// Reference set seeded into `statuses` before traffic is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    InProgress = 1,
    Completed = 2,
    Cancelled = 3,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            OrderStatus::InProgress => "InProgress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<OrderStatus> for Status {
    fn from(value: OrderStatus) -> Self {
        Status {
            id: value.id(),
            name: value.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_one_to_three() {
        let ids: Vec<i32> = OrderStatus::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(Status::from(OrderStatus::Cancelled).name, "Cancelled");
    }
}
