//! Resource guard: predictive memory-budget abort.
//!
//! Memory usage is sampled through an injected [`MemoryProbe`] between
//! expansion rounds. The guard trips when
//!
//! ```text
//! current + multiplier * delta > limit
//! ```
//!
//! where `delta` is the growth since the previous sample (saturating at 0).
//! The check anticipates that the next rounds grow the frontier and closed
//! set by a similar increment, so the host limit is overshot by at most one
//! round's growth.

/// Sizes of the engine's data structures at the time of a sample.
///
/// Probes that measure the real process may ignore this; estimating probes
/// derive their figure from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchFootprint {
    /// Number of states in the closed set.
    pub closed_len: usize,
    /// Number of nodes waiting in the frontier.
    pub frontier_len: usize,
    /// Expansion rounds completed so far.
    pub expansions: u64,
}

/// Injected source of memory-usage samples, in bytes.
pub trait MemoryProbe {
    /// Current memory usage in bytes.
    fn sample(&mut self, footprint: &SearchFootprint) -> u64;
}

impl<F> MemoryProbe for F
where
    F: FnMut(&SearchFootprint) -> u64,
{
    fn sample(&mut self, footprint: &SearchFootprint) -> u64 {
        self(footprint)
    }
}

/// Deterministic probe estimating `(closed_len + frontier_len) * bytes_per_state`.
#[derive(Debug, Clone, Copy)]
pub struct FootprintEstimateProbe {
    pub bytes_per_state: u64,
}

impl FootprintEstimateProbe {
    /// Estimate sized for a closed-set entry of state type `S` and action
    /// type `A`: the key, the parent copy and the inbound action.
    ///
    /// Sizes are shallow `size_of` values. Heap storage owned by a state
    /// (a `Vec`, `String` or `Box` payload) is not counted, so for such
    /// states the estimate is a lower bound; use [`Self::per_entry`] with a
    /// domain figure instead.
    #[must_use]
    pub fn for_types<S, A>() -> Self {
        let per_entry = 2 * std::mem::size_of::<S>() + std::mem::size_of::<A>();
        Self {
            bytes_per_state: (per_entry as u64).max(1),
        }
    }

    /// Estimate from a caller-supplied closed-set entry size.
    #[must_use]
    pub fn per_entry(bytes_per_state: u64) -> Self {
        Self {
            bytes_per_state: bytes_per_state.max(1),
        }
    }
}

impl MemoryProbe for FootprintEstimateProbe {
    fn sample(&mut self, footprint: &SearchFootprint) -> u64 {
        let states = (footprint.closed_len as u64).saturating_add(footprint.frontier_len as u64);
        states.saturating_mul(self.bytes_per_state)
    }
}

/// Result of one guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// No sample was due this round.
    Skipped,
    /// Sampled and within budget.
    Within { sampled: u64, delta: u64 },
    /// Sampled and the projection exceeds the limit.
    Exceeded { sampled: u64, delta: u64, limit: u64 },
}

/// Predictive memory-budget check, fresh per search call.
#[derive(Debug, Clone)]
pub struct ResourceGuard {
    limit: u64,
    multiplier: u64,
    sample_interval: u64,
    previous: Option<u64>,
    rounds: u64,
    samples_taken: u64,
}

impl ResourceGuard {
    /// Create a guard. `sample_interval` of 0 is treated as 1.
    #[must_use]
    pub fn new(limit: u64, multiplier: u64, sample_interval: u64) -> Self {
        Self {
            limit,
            multiplier,
            sample_interval: sample_interval.max(1),
            previous: None,
            rounds: 0,
            samples_taken: 0,
        }
    }

    /// Number of probe samples taken so far.
    #[must_use]
    pub fn samples_taken(&self) -> u64 {
        self.samples_taken
    }

    /// Run one round of the check. Samples the probe every
    /// `sample_interval` rounds, starting with the first.
    pub fn check(
        &mut self,
        probe: &mut dyn MemoryProbe,
        footprint: &SearchFootprint,
    ) -> GuardVerdict {
        let due = self.rounds % self.sample_interval == 0;
        self.rounds += 1;
        if !due {
            return GuardVerdict::Skipped;
        }

        let sampled = probe.sample(footprint);
        self.samples_taken += 1;
        let delta = self
            .previous
            .map_or(0, |prev| sampled.saturating_sub(prev));
        self.previous = Some(sampled);

        let projected = sampled.saturating_add(self.multiplier.saturating_mul(delta));
        if projected > self.limit {
            GuardVerdict::Exceeded {
                sampled,
                delta,
                limit: self.limit,
            }
        } else {
            GuardVerdict::Within { sampled, delta }
        }
    }
}
