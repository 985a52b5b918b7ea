// src/context.rs
//! Shared Simulation Context and the Checkout/Commit Protocol
//!
//! # The Canonical Stream
//!
//! All stochastic light-curve models in one simulation share a single
//! [`RandomStream`] whose draw order is globally reproducible: constructing
//! the same models against the same seed and requesting their fluxes in the
//! same order replays bit-identical results. The context is constructed
//! explicitly and passed (as `Rc<SimContext>`) through stochastic model
//! constructors, so every consumer of the canonical stream is visible at the
//! call site.
//!
//! # The Transactional Protocol
//!
//! A stochastic realization must advance the canonical draw order by exactly
//! the number of draws the *successful* computation consumed. The protocol:
//!
//! 1. **Checkout**: [`SimContext::checkout`] returns an independent snapshot
//!    of the canonical stream. The snapshot is private and disposable;
//!    operations on it affect neither the context nor other checkouts.
//! 2. **Compute**: the realization draws exclusively from the snapshot. On
//!    any error the snapshot is dropped, the canonical stream is untouched,
//!    and the error propagates to the caller.
//! 3. **Commit**: only after the full realization succeeds does
//!    [`SimContext::commit`] overwrite the canonical stream with the
//!    snapshot's final state. Commit itself cannot fail.
//!
//! This yields atomicity (partial failures are invisible to the canonical
//! stream), reproducibility, and isolation (no model can observe another's
//! in-progress computation).
//!
//! # Concurrency
//!
//! The protocol is single-threaded by construction: the context is shared via
//! `Rc<RefCell<_>>`, which cannot cross threads. Concurrent checkouts would
//! both snapshot the pre-mutation state and the last commit would win,
//! destroying reproducibility — a multi-threaded simulation must instead fork
//! one independent stream per worker from a per-task seed.

use crate::rng::RandomStream;
use std::cell::RefCell;
use std::rc::Rc;

/// Seed used by [`SimContext::new`]. Fixed so that runs which do not ask for
/// a specific seed are still reproducible.
pub const DEFAULT_SEED: u64 = 42;

/// Holds the canonical random stream for one simulation.
///
/// The checkout/commit pair is the sole mutation discipline permitted on the
/// canonical stream.
#[derive(Debug)]
pub struct SimContext {
    stream: RefCell<RandomStream>,
}

impl SimContext {
    /// Create a context seeded with [`DEFAULT_SEED`].
    pub fn new() -> Rc<Self> {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a context with an explicit seed.
    pub fn with_seed(seed: u64) -> Rc<Self> {
        Rc::new(SimContext {
            stream: RefCell::new(RandomStream::new(seed)),
        })
    }

    /// Borrow an independent snapshot of the canonical stream.
    ///
    /// Draws taken from the snapshot do not advance the canonical stream;
    /// they become part of the global draw order only when the snapshot is
    /// passed back through [`SimContext::commit`].
    pub fn checkout(&self) -> RandomStream {
        self.stream.borrow().clone()
    }

    /// Replace the canonical stream's state with `stream`'s.
    ///
    /// Called exactly once per successful realization, with the snapshot that
    /// realization drew from. Never fails.
    pub fn commit(&self, stream: RandomStream) {
        self.stream.borrow_mut().assign(&stream);
    }
}
