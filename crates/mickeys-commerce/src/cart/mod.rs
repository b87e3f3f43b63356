//! Shopping cart.
//!
//! Contains the cart store, its line types and, with the `storage` feature,
//! session persistence.

mod line;
#[cfg(feature = "storage")]
mod persist;
mod store;

pub use line::{CartItem, CartLine};
#[cfg(feature = "storage")]
pub use persist::CartSessions;
pub use store::{CartSnapshot, CartStore, MAX_QUANTITY_PER_ITEM};
