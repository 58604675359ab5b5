//! Backend abstraction trait definition

mod connector_listing;
mod lifecycle_backend;

pub use connector_listing::ConnectorListing;
pub use lifecycle_backend::{
    status_channel, LifecycleBackend, StatusEventReceiver, StatusEventSender,
};
