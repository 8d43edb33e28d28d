//! # System Lifecycle
//!
//! Starts the Product actor, hands out its client and stops it again.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - Wait for the actor task to finish
//!
//! Requests already queued are still processed and persisted. Clones of the client handed
//! out elsewhere keep the actor alive until they are dropped too.
//!
//! ## Observability
//!
//! Call [`setup_tracing`](collection_actor::tracing::setup_tracing) once before starting the
//! system; the actor logs its start, every mutation and its shutdown.

pub mod product_system;

pub use product_system::*;
