//! Terminal-independent model of the page: where every block sits in the
//! scrolling document, which blocks the viewport currently intersects, and
//! how deferred images are decoded.

pub mod images;
pub mod layout;
pub mod observer;

pub use images::{load_thumbnail, ImageError, Thumbnail};
pub use layout::{
    Extent, NavAction, NavGeometry, PageLayout, SectionId, IMAGE_COLUMNS, IMAGE_ROWS, NAV_LINKS,
};
pub use observer::{intersection_ratio, IntersectionEntry, IntersectionObserver, ObserverOptions};
