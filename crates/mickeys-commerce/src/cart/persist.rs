//! Session-backed cart persistence.

use crate::cart::{CartSnapshot, CartStore};
use crate::error::CommerceError;
use crate::pricing::PricingEngine;
use mickeys_cache::{Cache, Session, SessionId};
use tracing::debug;

/// Loads and saves carts keyed by session.
///
/// Only lines are written. Totals are recomputed by the engine after every
/// load, so a tax or promo change applies to carts already in storage.
#[derive(Debug, Clone)]
pub struct CartSessions {
    sessions: Session<CartSnapshot>,
    engine: PricingEngine,
}

impl CartSessions {
    pub fn new(cache: Cache, engine: PricingEngine) -> Self {
        Self {
            sessions: Session::new(cache),
            engine,
        }
    }

    /// The cart for a session, empty if the session has none yet.
    pub fn load(&self, id: &SessionId) -> Result<CartStore, CommerceError> {
        match self.sessions.get(id)? {
            Some(snapshot) => CartStore::restore(snapshot, self.engine.clone()),
            None => {
                debug!(session = %id, "No stored cart; starting empty");
                Ok(CartStore::new(self.engine.clone()))
            }
        }
    }

    pub fn save(&self, id: &SessionId, cart: &CartStore) -> Result<(), CommerceError> {
        self.sessions.set(id, &cart.snapshot())?;
        debug!(session = %id, lines = cart.lines().len(), "Saved cart");
        Ok(())
    }

    /// Tear down the session. The next load starts from an empty cart.
    pub fn end(&self, id: &SessionId) -> Result<(), CommerceError> {
        self.sessions.delete(id)?;
        Ok(())
    }
}
