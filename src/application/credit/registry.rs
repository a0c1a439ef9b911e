//! Registry mapping client classifications to credit-limit strategies.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::Classification;

use super::strategy::{
    CreditLimitStrategy, DefaultCreditLimit, ImportantClientCreditLimit,
    VeryImportantClientCreditLimit,
};

/// Configuration errors detected while building a [`StrategyRegistry`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Credit strategy label '{0}' is registered more than once")]
    DuplicateLabel(&'static str),

    #[error("More than one fallback credit strategy registered")]
    DuplicateFallback,

    #[error("No fallback credit strategy registered")]
    MissingFallback,
}

/// Immutable lookup from classification label to strategy.
///
/// Built once at startup and shared behind an `Arc`; resolution never fails
/// because a fallback strategy is guaranteed at construction.
pub struct StrategyRegistry {
    by_label: HashMap<&'static str, Arc<dyn CreditLimitStrategy>>,
    fallback: Arc<dyn CreditLimitStrategy>,
}

impl StrategyRegistry {
    /// Builds a registry from an explicit list of strategies.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateLabel`] if two strategies declare the same label
    /// - [`RegistryError::DuplicateFallback`] if more than one strategy is unclassified
    /// - [`RegistryError::MissingFallback`] if none is
    pub fn new(
        strategies: impl IntoIterator<Item = Arc<dyn CreditLimitStrategy>>,
    ) -> Result<Self, RegistryError> {
        let mut by_label = HashMap::new();
        let mut fallback = None;

        for strategy in strategies {
            match strategy.classification().label() {
                Some(label) => {
                    if by_label.insert(label, strategy).is_some() {
                        return Err(RegistryError::DuplicateLabel(label));
                    }
                }
                None => {
                    if fallback.replace(strategy).is_some() {
                        return Err(RegistryError::DuplicateFallback);
                    }
                }
            }
        }

        let fallback = fallback.ok_or(RegistryError::MissingFallback)?;

        Ok(Self { by_label, fallback })
    }

    /// Registry with every built-in strategy.
    ///
    /// # Errors
    ///
    /// Only if the built-in list itself is inconsistent.
    pub fn standard() -> Result<Self, RegistryError> {
        let strategies: [Arc<dyn CreditLimitStrategy>; 3] = [
            Arc::new(DefaultCreditLimit),
            Arc::new(ImportantClientCreditLimit),
            Arc::new(VeryImportantClientCreditLimit),
        ];
        Self::new(strategies)
    }

    /// Resolves a classification name to its strategy.
    ///
    /// Exact match on the label; any other name gets the fallback.
    pub fn resolve(&self, classification_name: &str) -> &dyn CreditLimitStrategy {
        let strategy = self
            .by_label
            .get(classification_name)
            .unwrap_or(&self.fallback);
        &**strategy
    }

    /// Classifications with a registered strategy, fallback last.
    pub fn classifications(&self) -> Vec<Classification> {
        let mut classifications: Vec<_> = self
            .by_label
            .values()
            .map(|s| s.classification())
            .collect();
        classifications.push(self.fallback.classification());
        classifications
    }
}
