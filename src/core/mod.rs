//! Record reconciliation and role-gated mutation.

pub mod assignment;
pub mod policy;
pub mod resolver;
pub mod session;

pub use assignment::RawAssignment;
pub use policy::{finalize, SubmitMode};
pub use resolver::{resolve, ResolvedAssignee};
pub use session::{EditSession, FieldChange};
