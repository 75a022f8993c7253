pub mod requests;
pub mod responses;

pub use requests::{LoginQuery, SubjectQuery};
pub use responses::AuthenticatedAccount;
