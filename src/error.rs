//! Error types for the colorsmith library

use thiserror::Error;

/// Result type alias for colorsmith operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color parsing, palette generation and image loading
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex string could not be parsed
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Numeric component outside its valid domain at construction time
    #[error("Component out of range: {component} = {value} (allowed {min}..={max})")]
    ComponentOutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Requested color count outside the accepted bounds
    #[error("Invalid count: {count} (allowed {min}..={max})")]
    InvalidCount { count: usize, min: usize, max: usize },

    /// Palette strategy name not recognized
    #[error("Unknown palette strategy: {name}")]
    UnknownStrategy { name: String },

    /// Manipulation operation name not recognized
    #[error("Unknown color operation: {name}")]
    UnknownOperation { name: String },

    /// Theme role name not recognized
    #[error("Unknown theme role: {name}")]
    UnknownRole { name: String },

    /// Palette key used twice
    #[error("Duplicate palette key: {key}")]
    DuplicateKey { key: String },

    /// Theme role requested twice
    #[error("Duplicate theme role: {role}")]
    DuplicateRole { role: String },

    /// Image file or buffer could not be read or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image source rejected before decoding (type, size, layout)
    #[error("Unsupported image source: {reason}")]
    UnsupportedSource { reason: String },

    /// Configuration could not be read, written or validated
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unsupported source error
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedSource {
            reason: reason.into(),
        }
    }

    /// Check if this error was raised by input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidHex { .. }
                | ColorError::ComponentOutOfRange { .. }
                | ColorError::InvalidCount { .. }
                | ColorError::UnknownStrategy { .. }
                | ColorError::UnknownOperation { .. }
                | ColorError::UnknownRole { .. }
                | ColorError::DuplicateKey { .. }
                | ColorError::DuplicateRole { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidHex { input, .. } => {
                format!("'{}' is not a valid hex color. Use #rgb or #rrggbb.", input)
            }
            ColorError::InvalidCount { min, max, .. } => {
                format!("Please request between {} and {} colors.", min, max)
            }
            ColorError::UnknownStrategy { name } => {
                format!("'{}' is not a known palette type.", name)
            }
            ColorError::ImageLoadError { .. } | ColorError::UnsupportedSource { .. } => {
                "Could not read the image. Please upload a JPEG, PNG, WebP or GIF file.".to_string()
            }
            _ => "The color request could not be processed. Please check the input.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        let err = ColorError::InvalidCount {
            count: 0,
            min: 1,
            max: 50,
        };
        assert!(err.is_validation());

        let err = ColorError::unsupported("image/tiff");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = ColorError::UnknownStrategy {
            name: "rainbow".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown palette strategy: rainbow");
    }

    #[test]
    fn test_user_message_mentions_input() {
        let err = ColorError::InvalidHex {
            input: "#12".to_string(),
            reason: "expected 3 or 6 digits".to_string(),
        };
        assert!(err.user_message().contains("#12"));
    }
}
