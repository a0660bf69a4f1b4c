/// Domain layer - SBOM model, validation rules and unification
///
/// Everything in this module is pure: no I/O, no clocks other than the
/// unification timestamp, no shared state.
pub mod domain;
pub mod policies;
pub mod services;
