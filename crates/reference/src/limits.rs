use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ReferenceError;

/// Numeric baseline bounds a shipment's dimensions are validated against.
///
/// Any bound absent from the source defaults to "no constraint": `0` for a
/// lower bound, `+inf` for an upper bound. Loaded once at process start and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineLimits {
    pub min_weight: f64,
    pub max_weight: f64,
    pub min_length: f64,
    pub max_length: f64,
    pub min_breadth: f64,
    pub max_breadth: f64,
    pub min_height: f64,
    pub max_height: f64,
}

/// Source representation: every bound optional, so a sparse limits file is
/// "fewer constraints", not "reject everything".
#[derive(Debug, Default, Deserialize)]
struct RawLimits {
    min_weight: Option<f64>,
    max_weight: Option<f64>,
    min_length: Option<f64>,
    max_length: Option<f64>,
    min_breadth: Option<f64>,
    max_breadth: Option<f64>,
    min_height: Option<f64>,
    max_height: Option<f64>,
}

impl From<RawLimits> for BaselineLimits {
    fn from(raw: RawLimits) -> Self {
        Self {
            min_weight: raw.min_weight.unwrap_or(0.0),
            max_weight: raw.max_weight.unwrap_or(f64::INFINITY),
            min_length: raw.min_length.unwrap_or(0.0),
            max_length: raw.max_length.unwrap_or(f64::INFINITY),
            min_breadth: raw.min_breadth.unwrap_or(0.0),
            max_breadth: raw.max_breadth.unwrap_or(f64::INFINITY),
            min_height: raw.min_height.unwrap_or(0.0),
            max_height: raw.max_height.unwrap_or(f64::INFINITY),
        }
    }
}

impl Default for BaselineLimits {
    /// Unconstrained limits: every bound is `[0, +inf]`.
    fn default() -> Self {
        RawLimits::default().into()
    }
}

impl BaselineLimits {
    /// Load limits from a TOML file with optional `min_*`/`max_*` keys.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let raw: RawLimits =
            toml::from_str(&text).map_err(|e| ReferenceError::Parse(e.to_string()))?;
        let limits = Self::from(raw);
        info!(path = %path.display(), "baseline limits loaded");
        Ok(limits)
    }

    /// Load limits from a headed CSV file. The first data row wins; blank
    /// cells mean "no constraint". An empty file is an error.
    pub fn from_csv_file(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
        let raw: RawLimits = reader
            .deserialize()
            .next()
            .ok_or(ReferenceError::MissingLimits)?
            .map_err(csv_error)?;
        let limits = Self::from(raw);
        info!(path = %path.display(), "baseline limits loaded");
        Ok(limits)
    }

    /// Whether a weight lies within the inclusive `[min, max]` bound.
    pub fn weight_in_range(&self, value: f64) -> bool {
        (self.min_weight..=self.max_weight).contains(&value)
    }

    /// Whether a length lies within the inclusive `[min, max]` bound.
    pub fn length_in_range(&self, value: f64) -> bool {
        (self.min_length..=self.max_length).contains(&value)
    }

    /// Whether a breadth lies within the inclusive `[min, max]` bound.
    pub fn breadth_in_range(&self, value: f64) -> bool {
        (self.min_breadth..=self.max_breadth).contains(&value)
    }

    /// Whether a height lies within the inclusive `[min, max]` bound.
    pub fn height_in_range(&self, value: f64) -> bool {
        (self.min_height..=self.max_height).contains(&value)
    }
}

fn csv_error(err: csv::Error) -> ReferenceError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => ReferenceError::Io(io),
        other => ReferenceError::Parse(format!("{other:?}")),
    }
}
