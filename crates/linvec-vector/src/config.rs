//! Growth configuration for [`Vector`](crate::Vector).

/// Controls how a vector's capacity grows when a push overflows it.
///
/// The next capacity is `max(capacity * factor, min_capacity)`,
/// saturated at `u32::MAX`. The default (factor 2, floor 1) gives
/// amortized O(1) pushes and escapes the zero-capacity state on the
/// first push.
///
/// The fields are private so that every policy in circulation has passed
/// [`GrowthPolicy::validate`]; build custom policies with
/// [`GrowthPolicy::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the current capacity on overflow.
    ///
    /// Default: 2. Must be at least 2.
    factor: u32,

    /// Smallest capacity allocated by a growing push.
    ///
    /// Default: 1. Must be at least 1.
    min_capacity: u32,
}

impl GrowthPolicy {
    /// Default capacity multiplier.
    pub const DEFAULT_FACTOR: u32 = 2;

    /// Default capacity floor.
    pub const DEFAULT_MIN_CAPACITY: u32 = 1;

    /// The doubling policy used by [`Vector::new`](crate::Vector::new).
    pub const DOUBLING: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
    };

    /// Create a policy with the given factor and floor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `factor < 2` (growth would stall) or
    /// `min_capacity == 0` (an empty vector could never grow).
    pub fn new(factor: u32, min_capacity: u32) -> Result<Self, String> {
        let policy = Self {
            factor,
            min_capacity,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Multiplier applied to the current capacity on overflow.
    pub fn factor(&self) -> u32 {
        self.factor
    }

    /// Smallest capacity allocated by a growing push.
    pub fn min_capacity(&self) -> u32 {
        self.min_capacity
    }

    /// Check the policy's invariants.
    ///
    /// # Errors
    ///
    /// See [`GrowthPolicy::new`].
    pub fn validate(&self) -> Result<(), String> {
        if self.factor < 2 {
            return Err(format!("growth factor must be >= 2, got {}", self.factor));
        }
        if self.min_capacity == 0 {
            return Err("min_capacity must be >= 1".to_string());
        }
        Ok(())
    }

    /// Capacity to grow to when a push finds `current` slots full.
    ///
    /// For a valid policy the result exceeds `current` whenever
    /// `current < u32::MAX`.
    pub fn next_capacity(&self, current: u32) -> u32 {
        current
            .saturating_mul(self.factor)
            .max(self.min_capacity)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}
