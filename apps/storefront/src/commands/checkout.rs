//! # Checkout Commands
//!
//! ## Checkout Timeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    checkout() on a non-empty cart                       │
//! │                                                                         │
//! │  t = 0                                t = delay (1500 ms default)       │
//! │  ──────                               ──────────────────────────        │
//! │  pending = true                       cart cleared + persisted          │
//! │  view published (button disabled)     pending = false                   │
//! │  timer scheduled                      view published                    │
//! │         │                             checkout_completed (once)         │
//! │         │                                       ▲                       │
//! │         └───────────── ScheduledTask ───────────┘                       │
//! │                              │                                          │
//! │                       cancel_checkout()                                 │
//! │                       pending = false, cart untouched                   │
//! │                                                                         │
//! │  checkout() on an empty cart: checkout_empty_rejected, nothing else     │
//! │  checkout() while pending:    CHECKOUT_IN_PROGRESS                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole cart is cleared at completion, including entries added while
//! the checkout was pending.

use chrono::Utc;
use tracing::{debug, error, info};

use folio_core::{CoreError, Notification};

use crate::error::{ApiError, ApiResult};
use crate::schedule::ScheduledTask;
use crate::state::PendingCheckout;
use crate::storefront::Storefront;

/// What `checkout()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStatus {
    /// Completion is scheduled.
    Scheduled,

    /// The cart was empty; `checkout_empty_rejected` was published.
    EmptyCart,
}

impl Storefront {
    /// Starts checkout of the current cart.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// ## Errors
    /// - `CHECKOUT_IN_PROGRESS` when a checkout is already pending
    /// - `INTERNAL` when there is no Tokio runtime
    pub fn checkout(&self) -> ApiResult<CheckoutStatus> {
        debug!("checkout command");

        let scheduled = self.state.with_state_mut(|s| {
            if s.is_checkout_pending() {
                return Err(ApiError::from(CoreError::CheckoutInProgress));
            }
            if s.cart.is_empty() {
                return Ok(None);
            }

            let seq = s.next_checkout_seq();
            let storefront = self.clone();
            let task = ScheduledTask::schedule(self.checkout_delay, move || {
                storefront.complete_checkout(seq)
            })?;
            s.checkout = Some(PendingCheckout { seq, task });

            debug!(seq, entries = s.cart.len(), "Checkout scheduled");
            Ok(Some(s.view()))
        })?;

        match scheduled {
            Some(view) => {
                self.publish(&view, None);
                Ok(CheckoutStatus::Scheduled)
            }
            None => {
                debug!("Checkout rejected, cart is empty");
                self.announce(&Notification::CheckoutEmptyRejected);
                Ok(CheckoutStatus::EmptyCart)
            }
        }
    }

    /// Cancels a pending checkout. The cart is left as it is.
    ///
    /// Returns `false` when no checkout was pending.
    pub fn cancel_checkout(&self) -> bool {
        debug!("cancel_checkout command");

        let view = self.state.with_state_mut(|s| {
            let pending = s.checkout.take()?;
            pending.task.cancel();
            info!(seq = pending.seq, "Checkout cancelled");
            Some(s.view())
        });

        match view {
            Some(view) => {
                self.publish(&view, None);
                true
            }
            None => false,
        }
    }

    /// Timer callback: clears the cart and announces the order.
    fn complete_checkout(&self, seq: u64) {
        let finished = self.state.with_state_mut(|s| {
            match s.checkout {
                Some(ref pending) if pending.seq == seq => {}
                _ => return None,
            }
            s.checkout = None;

            let item_count = s.cart.len();
            let total = s.cart.total();
            let cleared = s.cart.clear().map(|_| (item_count, total));
            Some((cleared, s.view()))
        });

        let Some((cleared, view)) = finished else {
            debug!(seq, "Stale checkout completion ignored");
            return;
        };

        match cleared {
            Ok((item_count, total)) => {
                info!(seq, item_count, total = %total, "Checkout completed");
                self.publish(
                    &view,
                    Some(Notification::CheckoutCompleted {
                        item_count,
                        total: total.to_string(),
                        completed_at: Utc::now(),
                    }),
                );
            }
            Err(e) => {
                error!(seq, error = %e, "Checkout could not persist the cleared cart");
                self.publish(&view, None);
            }
        }
    }
}
