//! # garage-taxonomy
//!
//! The closed set of valid `system -> component -> failure_mode` paths and the
//! validator that turns untrusted proposals into [`DiagnosisCandidate`]s.
//!
//! A [`DiagnosisCandidate`] can only be built here, after its path has been
//! checked, so an unvalidated candidate cannot reach the rest of the workspace.

mod builtin;
pub mod candidate;
pub mod registry;
pub mod validator;
pub mod vmrs;

pub use candidate::DiagnosisCandidate;
pub use registry::TaxonomyRegistry;
pub use validator::{DiagnosisValidator, RejectedProposal, ValidationReport};
pub use vmrs::{VmrsCode, VmrsMapper};
