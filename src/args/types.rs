use clap::ValueEnum;
use std::num::{NonZeroU64, NonZeroUsize};

use crate::error::ValidationError;

/// Upper bound of the heavy-payload percentage.
const HEAVY_MIX_MAX: u8 = 100;

/// Percentage chance (0-100) that a request carries the heavy payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeavyMix(u8);

impl HeavyMix {
    pub const NONE: Self = HeavyMix(0);
    pub const HALF: Self = HeavyMix(50);
    pub const ALL: Self = HeavyMix(HEAVY_MIX_MAX);

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u64> for HeavyMix {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(percent) if percent <= HEAVY_MIX_MAX => Ok(HeavyMix(percent)),
            Ok(_) | Err(_) => Err(ValidationError::HeavyMixOutOfRange { value }),
        }
    }
}

impl std::str::FromStr for HeavyMix {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        HeavyMix::try_from(value)
    }
}

impl From<HeavyMix> for u8 {
    fn from(value: HeavyMix) -> Self {
        value.get()
    }
}

/// Fixed rate sweeps; each runs every mode at each rate for one second.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SweepPreset {
    /// 100-2000 req/s in steps of 100, light payloads only
    #[value(alias = "lt1")]
    Wide,
    /// 400-1200 req/s in steps of 100, light payloads only
    #[value(alias = "lt2")]
    Narrow,
    /// 400-1200 req/s in steps of 100, 50% heavy payloads
    #[value(alias = "lt3")]
    HalfHeavy,
    /// 400-1200 req/s in steps of 100, heavy payloads only
    #[value(alias = "lt4")]
    AllHeavy,
    /// One mixed run at 20 req/s for 10 seconds
    #[value(alias = "lt5")]
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveU64(NonZeroU64);

impl PositiveU64 {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for PositiveU64 {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value)
            .map(PositiveU64)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveU64 {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveU64::try_from(value)
    }
}

impl From<PositiveU64> for u64 {
    fn from(value: PositiveU64) -> Self {
        value.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveUsize::try_from(value)
    }
}

impl From<PositiveUsize> for usize {
    fn from(value: PositiveUsize) -> Self {
        value.get()
    }
}
