// Investment catalog: the candidate options for one optimization run

use super::value_objects::RiskCategory;
use std::collections::HashSet;
use std::fmt;

/// A single investment candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentOption {
    pub id: u32,
    pub description: String,
    pub cost: u64,
    pub payback: u64,
    pub risk: RiskCategory,
}

impl InvestmentOption {
    pub fn new(
        id: u32,
        description: impl Into<String>,
        cost: u64,
        payback: u64,
        risk: RiskCategory,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            cost,
            payback,
            risk,
        }
    }
}

impl fmt::Display for InvestmentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Investment Option {}:", self.id)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Cost: {}", self.cost)?;
        writeln!(f, "Payback: {}", self.payback)?;
        write!(f, "Risk: {}", self.risk)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogRuleError {
    #[error("duplicate option id {0}")]
    DuplicateId(u32),

    #[error("total {0} of the catalog exceeds {max}", max = u64::MAX)]
    TotalOverflow(&'static str),
}

/// Ordered, read-only list of investment options
#[derive(Debug, Clone, Default)]
pub struct InvestmentCatalog {
    options: Vec<InvestmentOption>,
}

impl InvestmentCatalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Ids must be unique, and the summed cost and payback of all options must
    /// fit in a `u64` so that any selection's totals do too.
    pub fn new(options: Vec<InvestmentOption>) -> Result<Self, CatalogRuleError> {
        let mut seen = HashSet::with_capacity(options.len());
        let (mut cost, mut payback) = (0u64, 0u64);
        for option in &options {
            if !seen.insert(option.id) {
                return Err(CatalogRuleError::DuplicateId(option.id));
            }
            cost = cost
                .checked_add(option.cost)
                .ok_or(CatalogRuleError::TotalOverflow("cost"))?;
            payback = payback
                .checked_add(option.payback)
                .ok_or(CatalogRuleError::TotalOverflow("payback"))?;
        }
        Ok(Self { options })
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InvestmentOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InvestmentOption> {
        self.options.iter()
    }

    pub fn options(&self) -> &[InvestmentOption] {
        &self.options
    }

    /// Catalog indices of the options in a risk tier
    pub fn indices_of(&self, risk: RiskCategory) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.risk == risk)
            .map(|(i, _)| i)
            .collect()
    }
}

impl<'a> IntoIterator for &'a InvestmentCatalog {
    type Item = &'a InvestmentOption;
    type IntoIter = std::slice::Iter<'a, InvestmentOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
