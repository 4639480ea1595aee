use crate::domain::{
    solver_service::{SolverError, SolverService},
    value_objects::SolverBackend,
};

/// Factory for creating solver instances based on configuration
///
/// Each call hands out a fresh solver; nothing is shared between solves.
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a specific backend.
    ///
    /// Backends not compiled into this build yield `SolverNotAvailable`.
    pub fn create(backend: SolverBackend) -> Result<Box<dyn SolverService>, SolverError> {
        match backend {
            SolverBackend::Auto => Self::create(SolverBackend::Highs)
                .or_else(|_| Self::create(SolverBackend::CoinCbc))
                .map_err(|_| {
                    SolverError::SolverNotAvailable(
                        "no solver backend compiled in (enable the `highs` or `cbc` feature)"
                            .to_string(),
                    )
                }),
            SolverBackend::Highs => Self::highs(false),
            SolverBackend::HighsLp => Self::highs(true),
            SolverBackend::CoinCbc => Self::coin_cbc(),
        }
    }

    #[cfg(feature = "highs")]
    fn highs(relaxed: bool) -> Result<Box<dyn SolverService>, SolverError> {
        use crate::solver::HighsSolver;

        if relaxed {
            Ok(Box::new(HighsSolver::relaxation()))
        } else {
            Ok(Box::new(HighsSolver::new()))
        }
    }

    #[cfg(not(feature = "highs"))]
    fn highs(_relaxed: bool) -> Result<Box<dyn SolverService>, SolverError> {
        Err(SolverError::SolverNotAvailable(
            "HiGHS support not compiled in (enable the `highs` feature)".to_string(),
        ))
    }

    #[cfg(feature = "cbc")]
    fn coin_cbc() -> Result<Box<dyn SolverService>, SolverError> {
        Ok(Box::new(crate::solver::CoinCbcSolver::new()))
    }

    #[cfg(not(feature = "cbc"))]
    fn coin_cbc() -> Result<Box<dyn SolverService>, SolverError> {
        Err(SolverError::SolverNotAvailable(
            "COIN-OR CBC support not compiled in (enable the `cbc` feature)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "highs")]
    #[test]
    fn test_auto_prefers_highs_mip() {
        let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
        assert_eq!(solver.name(), "HiGHS");
        assert!(solver.supports_mip());
    }

    #[cfg(feature = "highs")]
    #[test]
    fn test_highs_lp_is_relaxation() {
        let solver = SolverFactory::create(SolverBackend::HighsLp).unwrap();
        assert!(!solver.supports_mip());
    }

    #[cfg(not(feature = "cbc"))]
    #[test]
    fn test_missing_backend_is_unavailable() {
        let err = SolverFactory::create(SolverBackend::CoinCbc).err().unwrap();
        assert!(matches!(err, SolverError::SolverNotAvailable(_)));
    }
}
