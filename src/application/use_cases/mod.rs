/// Use cases module containing application business logic orchestration
mod unify_sboms;
mod validate_sbom;

pub use unify_sboms::UnifySbomsUseCase;
pub use validate_sbom::ValidateSbomUseCase;
