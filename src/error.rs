// MIT/Apache2 License

use std::fmt;

/// Sum error type for shape parameter validation.
///
/// Nothing in the path or clip layers returns this; generation is total and always emits a string. It
/// is produced only by [`RegisteredElement::check`](crate::RegisteredElement::check), for callers that
/// want to surface degenerate input instead of rendering it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Error {
    /// A coordinate or shape parameter is NaN or infinite.
    NonFinite,
    /// A rectangle has a negative width or height.
    NegativeExtent { width: f32, height: f32 },
    /// An arc radius is negative.
    NegativeArcRadius(f32),
    /// The corner radius exceeds half of the cut-out's shorter side, so the corner arcs overlap.
    OversizedCornerRadius { radius: f32, limit: f32 },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("Coordinate or shape parameter is not finite"),
            Self::NegativeExtent { width, height } => {
                write!(f, "Rectangle extent {}x{} is negative", width, height)
            }
            Self::NegativeArcRadius(radius) => write!(f, "Arc radius {} is negative", radius),
            Self::OversizedCornerRadius { radius, limit } => {
                write!(
                    f,
                    "Corner radius {} exceeds half of the shorter side ({})",
                    radius, limit
                )
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
