//! Scale families and their value warps.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{ChartError, ChartResult};
use crate::view::Interval;

/// Named scale family.
///
/// The set is closed: names are resolved through [`ScaleFamily::resolve`]
/// and anything else is an [`ChartError::UnknownScaleFamily`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum ScaleFamily {
    /// Linear scaling.
    #[default]
    Linear,
    /// Logarithmic scaling. The domain must not contain zero.
    Log,
    /// Power scaling with exponent 1.
    Pow,
    /// Power scaling with exponent 0.5.
    Sqrt,
    /// Bi-symmetric log scaling, defined through zero.
    Symlog,
    /// Time axis over epoch milliseconds (linear internally).
    Time,
}

impl ScaleFamily {
    /// Resolve a family by name.
    pub fn resolve(name: &str) -> ChartResult<Self> {
        name.parse()
            .map_err(|_| ChartError::UnknownScaleFamily(name.to_string()))
    }

    /// Family name as used in configuration.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Pick the warp for a domain, rejecting domains the family cannot map.
    pub(crate) fn warp_for(self, domain: Interval) -> ChartResult<Warp> {
        let invalid = || ChartError::InvalidDomain {
            family: self.name(),
            start: domain.start,
            end: domain.end,
        };
        if !domain.is_finite() {
            return Err(invalid());
        }
        match self {
            Self::Linear | Self::Time => Ok(Warp::Identity),
            Self::Pow => Ok(Warp::Pow(1.0)),
            Self::Sqrt => Ok(Warp::Pow(0.5)),
            Self::Symlog => Ok(Warp::Symlog),
            Self::Log => {
                if domain.start > 0.0 && domain.end > 0.0 {
                    Ok(Warp::Log { negative: false })
                } else if domain.start < 0.0 && domain.end < 0.0 {
                    Ok(Warp::Log { negative: true })
                } else {
                    Err(invalid())
                }
            }
        }
    }
}

/// Value transform applied before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Warp {
    Identity,
    Log { negative: bool },
    Pow(f64),
    Symlog,
}

impl Warp {
    /// Map a data value into warped space.
    pub(crate) fn forward(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Log { negative: false } => value.ln(),
            Self::Log { negative: true } => -(-value).ln(),
            Self::Pow(exponent) => {
                if value < 0.0 {
                    -(-value).powf(exponent)
                } else {
                    value.powf(exponent)
                }
            }
            Self::Symlog => value.signum() * value.abs().ln_1p(),
        }
    }

    /// Map a warped value back into data space.
    pub(crate) fn inverse(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Log { negative: false } => value.exp(),
            Self::Log { negative: true } => -(-value).exp(),
            Self::Pow(exponent) => {
                let exponent = exponent.recip();
                if value < 0.0 {
                    -(-value).powf(exponent)
                } else {
                    value.powf(exponent)
                }
            }
            Self::Symlog => value.signum() * value.abs().exp_m1(),
        }
    }
}
