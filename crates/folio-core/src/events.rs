//! # Notification Events
//!
//! Discrete signals describing a completed state transition. The storefront
//! emits them on its notification bus; toasts and counters consume them.
//!
//! ## Wire Shape
//! ```json
//! { "type": "book_added", "title": "Dune" }
//! { "type": "checkout_completed", "itemCount": 2, "total": "$37.49",
//!   "completedAt": "2026-01-01T12:00:00Z" }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Visual flavor of the toast a notification maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Danger,
    Default,
}

/// A state-change notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    BookAdded {
        title: String,
    },
    BookRemoved {
        title: String,
    },
    CartItemAdded {
        title: String,
    },
    CartItemRemoved {
        title: String,
    },
    CheckoutCompleted {
        #[serde(rename = "itemCount")]
        item_count: usize,
        total: String,
        #[serde(rename = "completedAt")]
        #[ts(as = "String")]
        completed_at: DateTime<Utc>,
    },
    CheckoutEmptyRejected,
}

impl Notification {
    /// Event name, as used in the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::BookAdded { .. } => "book_added",
            Notification::BookRemoved { .. } => "book_removed",
            Notification::CartItemAdded { .. } => "cart_item_added",
            Notification::CartItemRemoved { .. } => "cart_item_removed",
            Notification::CheckoutCompleted { .. } => "checkout_completed",
            Notification::CheckoutEmptyRejected => "checkout_empty_rejected",
        }
    }

    /// The book title the event is about, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            Notification::BookAdded { title }
            | Notification::BookRemoved { title }
            | Notification::CartItemAdded { title }
            | Notification::CartItemRemoved { title } => Some(title),
            Notification::CheckoutCompleted { .. } | Notification::CheckoutEmptyRejected => None,
        }
    }

    pub fn kind(&self) -> ToastKind {
        match self {
            Notification::BookAdded { .. }
            | Notification::CartItemAdded { .. }
            | Notification::CheckoutCompleted { .. } => ToastKind::Success,
            Notification::BookRemoved { .. } => ToastKind::Danger,
            Notification::CartItemRemoved { .. } | Notification::CheckoutEmptyRejected => {
                ToastKind::Default
            }
        }
    }

    /// Ready-to-show toast text.
    pub fn message(&self) -> String {
        match self {
            Notification::BookAdded { title } => format!("\"{title}\" added to collection!"),
            Notification::BookRemoved { title } => format!("\"{title}\" removed."),
            Notification::CartItemAdded { title } => format!("Added \"{title}\" to collection"),
            Notification::CartItemRemoved { title } => format!("\"{title}\" removed from cart."),
            Notification::CheckoutCompleted { .. } => {
                "Order confirmed! Thank you for your patronage.".to_string()
            }
            Notification::CheckoutEmptyRejected => "Your cart is empty!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_kinds() {
        let added = Notification::BookAdded {
            title: "Dune".to_string(),
        };
        assert_eq!(added.message(), "\"Dune\" added to collection!");
        assert_eq!(added.kind(), ToastKind::Success);
        assert_eq!(added.title(), Some("Dune"));

        let removed = Notification::BookRemoved {
            title: "Dune".to_string(),
        };
        assert_eq!(removed.kind(), ToastKind::Danger);

        assert_eq!(
            Notification::CheckoutEmptyRejected.message(),
            "Your cart is empty!"
        );
        assert_eq!(Notification::CheckoutEmptyRejected.kind(), ToastKind::Default);
    }

    #[test]
    fn test_serialized_tag_matches_name() {
        let events = [
            Notification::CartItemAdded {
                title: "Dune".to_string(),
            },
            Notification::CheckoutEmptyRejected,
            Notification::CheckoutCompleted {
                item_count: 2,
                total: "$37.49".to_string(),
                completed_at: Utc::now(),
            },
        ];

        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["type"], event.name());
        }
    }

    #[test]
    fn test_checkout_completed_fields_are_camel_case() {
        let event = Notification::CheckoutCompleted {
            item_count: 1,
            total: "$14.99".to_string(),
            completed_at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["itemCount"], 1);
        assert!(json.get("completedAt").is_some());
    }
}
