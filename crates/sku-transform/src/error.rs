use thiserror::Error;

/// A raw value that could not be converted.
///
/// Every variant carries the offending text so a failing record can be
/// reported without re-reading the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid measurement value: {value:?}")]
    InvalidMeasurement { value: String },

    #[error("invalid currency value: {value:?}")]
    InvalidCurrency { value: String },

    #[error("invalid value for conversion to boolean: {value:?}")]
    InvalidBoolean { value: String },

    #[error("unknown country name: {value:?}")]
    UnknownCountry { value: String },

    #[error("malformed UPC-A code {value:?}: {reason}")]
    MalformedCode { value: String, reason: String },
}

impl ConversionError {
    /// The raw value that failed to convert.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidMeasurement { value }
            | Self::InvalidCurrency { value }
            | Self::InvalidBoolean { value }
            | Self::UnknownCountry { value }
            | Self::MalformedCode { value, .. } => value,
        }
    }

    /// Short machine-friendly kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidMeasurement { .. } => "InvalidMeasurement",
            Self::InvalidCurrency { .. } => "InvalidCurrency",
            Self::InvalidBoolean { .. } => "InvalidBoolean",
            Self::UnknownCountry { .. } => "UnknownCountry",
            Self::MalformedCode { .. } => "MalformedCode",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
