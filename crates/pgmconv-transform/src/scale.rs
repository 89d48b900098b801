//! Scale descriptor parsing
//!
//! A scale descriptor selects a factor for each axis:
//!
//! - `F` - one factor for both axes
//! - `N/D` - one rational factor for both axes
//! - `FxG` - separate width and height factors
//! - `N/DxM/E` - separate rational factors
//!
//! Each `F` component is a decimal number or a `numerator/denominator`
//! pair. A leading `m` marks the descriptor as a shrink request;
//! without it the request is an enlargement. Both axes must point the
//! same way: factors above 1 enlarge, factors below 1 shrink, and a
//! factor of exactly 1 is neutral.

use crate::error::{TransformError, TransformResult};

/// Which way a scale request points.
///
/// Declared by the descriptor prefix and carried with the factors;
/// the sampling strategy is chosen from the factor magnitudes, not
/// from this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    /// No `m` prefix
    Enlarge,
    /// `m` prefix
    Shrink,
}

/// A parsed per-axis scale factor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor {
    /// Horizontal (width) factor
    pub w: f64,
    /// Vertical (height) factor
    pub h: f64,
    /// Declared direction of the request
    pub direction: ScaleDirection,
}

impl ScaleFactor {
    /// Parse a scale descriptor.
    ///
    /// # Errors
    ///
    /// * [`TransformError::BadSyntax`] - the descriptor matches none of
    ///   the accepted grammars
    /// * [`TransformError::InconsistentDirection`] - one factor is
    ///   above 1 while the other is below 1
    /// * [`TransformError::NonPositive`] - a factor is zero, negative,
    ///   or not a number
    pub fn parse(descriptor: &str) -> TransformResult<Self> {
        let (direction, body) = match descriptor.strip_prefix('m') {
            Some(rest) => (ScaleDirection::Shrink, rest),
            None => (ScaleDirection::Enlarge, descriptor),
        };

        let (w, h) = match body.split_once('x') {
            Some((w_part, h_part)) => (
                parse_ratio(w_part, descriptor)?,
                parse_ratio(h_part, descriptor)?,
            ),
            None => {
                let factor = parse_ratio(body, descriptor)?;
                (factor, factor)
            }
        };

        // Direction consistency is checked before positivity so that a
        // descriptor failing both reports the inconsistency.
        if (w < 1.0 && h > 1.0) || (w > 1.0 && h < 1.0) {
            return Err(TransformError::InconsistentDirection);
        }
        if !(w > 0.0) || !(h > 0.0) {
            return Err(TransformError::NonPositive);
        }

        Ok(ScaleFactor { w, h, direction })
    }
}

/// Parse one axis component: a number or a `numerator/denominator` pair.
fn parse_ratio(text: &str, descriptor: &str) -> TransformResult<f64> {
    match text.split_once('/') {
        Some((num, den)) => {
            Ok(parse_number(num, descriptor)? / parse_number(den, descriptor)?)
        }
        None => parse_number(text, descriptor),
    }
}

fn parse_number(text: &str, descriptor: &str) -> TransformResult<f64> {
    text.parse::<f64>()
        .map_err(|_| TransformError::BadSyntax(descriptor.to_string()))
}
