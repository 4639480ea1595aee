// Domain value objects representing core business concepts

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Risk tier of an investment option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Fixed tier order used when building per-tier constraints
    pub const ALL: [RiskCategory; 3] = [RiskCategory::Low, RiskCategory::Medium, RiskCategory::High];

    /// Map a risk label to its tier.
    ///
    /// Recognizes the labels used by the source spreadsheets (`Baixo`, `Médio`,
    /// `Alto`) and the English tier names. Returns `None` for anything else; the
    /// caller decides the fallback.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        match label {
            "Baixo" => return Some(RiskCategory::Low),
            "Médio" => return Some(RiskCategory::Medium),
            "Alto" => return Some(RiskCategory::High),
            _ => {}
        }

        match label.to_ascii_lowercase().as_str() {
            "low" => Some(RiskCategory::Low),
            "medium" => Some(RiskCategory::Medium),
            "high" => Some(RiskCategory::High),
            _ => None,
        }
    }

    /// Lowercase key used in constraint names and config tables
    pub fn key(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
        })
    }
}

/// Type of constraint comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintType {
    /// Less than or equal (≤)
    LessThanOrEqual,
    /// Greater than or equal (≥)
    GreaterThanOrEqual,
}

impl ConstraintType {
    /// Whether `lhs` satisfies this comparison against `bound`
    pub fn holds(&self, lhs: f64, bound: f64) -> bool {
        match self {
            ConstraintType::LessThanOrEqual => lhs <= bound,
            ConstraintType::GreaterThanOrEqual => lhs >= bound,
        }
    }
}

/// Status reported by a solver backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found optimal solution
    Optimal,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Any other terminal state (limits, ambiguous infeasible/unbounded, ...)
    Other,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
            SolutionStatus::Other => write!(f, "Other"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverBackend {
    /// Best mixed-integer backend compiled in
    #[default]
    Auto,
    /// HiGHS branch-and-bound
    Highs,
    /// HiGHS on the LP relaxation (integrality dropped)
    HighsLp,
    /// COIN-OR CBC
    CoinCbc,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::Highs => write!(f, "HiGHS"),
            SolverBackend::HighsLp => write!(f, "HiGHS (LP relaxation)"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
        }
    }
}

impl FromStr for SolverBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SolverBackend::Auto),
            "highs" => Ok(SolverBackend::Highs),
            "highs-lp" => Ok(SolverBackend::HighsLp),
            "coin-cbc" | "cbc" => Ok(SolverBackend::CoinCbc),
            other => Err(format!(
                "unknown solver backend '{other}' (expected auto, highs, highs-lp or coin-cbc)"
            )),
        }
    }
}
