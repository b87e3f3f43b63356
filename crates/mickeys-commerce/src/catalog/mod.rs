//! Catalogs the cart is fed from.
//!
//! Menu, wholesale and event data are inlined; gallery images come from the
//! gallery backend and are only held here.

mod events;
mod gallery;
mod menu;
mod wholesale;

pub use events::{Event, EventCalendar, EventKind};
pub use gallery::{Gallery, GalleryImage};
pub use menu::{Menu, MenuCategory, MenuItem};
pub use wholesale::{
    WholesaleCatalog, WholesaleCategory, WholesaleItem, WholesaleLine, WholesaleSelection,
};
