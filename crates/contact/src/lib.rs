//! Contact-submission workflow: validate an inquiry, format the staff
//! notification and the submitter confirmation, dispatch both through the
//! email capability and report a single outcome.

mod inquiry;
mod message;
mod service;
mod types;

pub use inquiry::*;
pub use message::*;
pub use service::*;
pub use types::*;
