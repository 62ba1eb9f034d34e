//! # Event Bus Module
//!
//! Decoupled notification between the canvas state layer and its observers.
//!
//! ## Overview
//!
//! - Publishers emit typed [`CanvasEvent`]s without knowing subscribers
//! - Subscribers filter by [`EventCategory`] and receive events by reference
//! - The bus is an explicit value shared through `Arc`, never a global
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use easel_core::event_bus::{CanvasEvent, DocumentEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = Arc::new(EventBus::new());
//!
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Document]),
//!     |event| {
//!         if let CanvasEvent::Document(doc) = event {
//!             println!("Document event: {:?}", doc);
//!         }
//!     },
//! );
//!
//! bus.publish(CanvasEvent::Document(DocumentEvent::Cleared));
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
