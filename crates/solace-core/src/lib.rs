// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Solace companion platform.
//!
//! This crate provides the foundational types shared by the risk-triage
//! core: risk levels, indicator taxonomies, result value objects, the
//! workspace error enum, and the adapter trait for externally supplied
//! sentiment.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SolaceError;
pub use traits::SentimentAdapter;
pub use types::{
    Indicator, MessageRiskResult, ProtectiveFactor, RiskDecision, RiskLevel, SentimentSnapshot,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solace_error_has_all_variants() {
        let _config = SolaceError::Config("test".into());
        let _sentiment = SolaceError::Sentiment {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _internal = SolaceError::Internal("test".into());
    }

    #[test]
    fn error_display_includes_context() {
        let err = SolaceError::Sentiment {
            message: "model not loaded".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "sentiment error: model not loaded");
    }

    #[test]
    fn sentiment_adapter_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn SentimentAdapter) {}
    }
}
