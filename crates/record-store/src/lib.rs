//! # Record Store
//!
//! An in-process, message-driven record store built on the **Actor Model**: every record kind
//! gets its own [`StoreActor`] running in a Tokio task, and callers talk to it through a cheap,
//! cloneable [`StoreClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`StoreRecord`]) - the record type, its creation payload, its actions and
//!    its error type. Record rules (e.g. which status changes are legal) live here.
//! 2. **Runtime Layer** ([`StoreActor`]) - owns the records and processes requests one at a time.
//! 3. **Interface Layer** ([`StoreClient`], [`StoreHandle`]) - typed async access.
//!
//! Because a store handles one message at a time, every request is atomic with respect to the
//! record it touches: an action either applies completely or not at all, and two concurrent
//! actions on the same record are serialized.
//!
//! ## Request Set
//!
//! | Request | Meaning |
//! |---------|---------|
//! | `Create` | store assigns the next free id |
//! | `Insert` | caller assigns the id (`Conflict` if taken) |
//! | `Get` | clone of the record, or `None` |
//! | `Exists` | presence check |
//! | `Action` | targeted mutation, `NotFound` if missing |
//!
//! Records are never deleted.
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers a real `StoreClient` from scripted expectations, so logic around a
//! client can be tested without running a store.

pub mod actor;
pub mod client;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use handle::StoreHandle;
pub use message::{Response, StoreRequest};
pub use record::StoreRecord;
