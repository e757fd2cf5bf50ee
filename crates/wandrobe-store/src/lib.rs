//! # wandrobe-store: In-Memory Application State
//!
//! The Store and its four sub-stores, plus the command surface the
//! presentation layer calls.
//!
//! ## State Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Store Composition                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         Store                                   │   │
//! │  │                                                                 │   │
//! │  │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────────┐  │   │
//! │  │  │  Catalog  │ │   Cart    │ │  Session  │ │   OrderBook   │  │   │
//! │  │  │           │ │           │ │           │ │               │  │   │
//! │  │  │ products  │ │ snapshot  │ │ identity  │ │  append-only  │  │   │
//! │  │  │ (ordered) │ │ lines     │ │ + role    │ │  orders       │  │   │
//! │  │  └───────────┘ └───────────┘ └───────────┘ └───────────────┘  │   │
//! │  │                                                                 │   │
//! │  │  Cross-store commands (add_to_cart, place_order, history)      │   │
//! │  │  live on Store; each sub-store owns its own invariants.        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • The composition root owns the Store and passes it by reference      │
//! │  • One logical writer at a time: no locks, no channels                 │
//! │  • Commands finish synchronously; re-render is a pure read             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod orders;
pub mod seed;
pub mod session;
pub mod store;

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use config::StoreConfig;
pub use orders::OrderBook;
pub use session::Session;
pub use store::{DashboardSummary, Store};
