pub mod company;
pub mod staff;

pub use company::{CompanyPatch, CompanyRecord, DriveType};
pub use staff::{Role, StaffMember};
