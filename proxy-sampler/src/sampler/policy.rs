//! Sampling policy selection

use std::fmt;

/// How many addresses to keep, and over what scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPolicy {
    /// Keep at most this many addresses from each subnet
    PerSubnet(usize),
    /// Keep exactly this many addresses drawn from all subnets together
    Total(usize),
}

impl SamplingPolicy {
    /// Pick the policy from the two configured counts
    ///
    /// A positive `total` selects total mode and `per_subnet` is ignored.
    pub fn from_counts(per_subnet: usize, total: usize) -> Self {
        if total > 0 {
            SamplingPolicy::Total(total)
        } else {
            SamplingPolicy::PerSubnet(per_subnet)
        }
    }
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingPolicy::PerSubnet(n) => write!(f, "{} per subnet", n),
            SamplingPolicy::Total(n) => write!(f, "{} total", n),
        }
    }
}
