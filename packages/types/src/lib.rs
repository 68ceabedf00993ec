// Anvaya CRM - shared wire types
//
// Single source of truth for the domain enums and the JSON bodies exchanged
// between the API server and its clients. The server's validation layer and
// the client's view layer both consume these definitions, so the enumerated
// value sets can never drift between the two.

pub mod enums;
pub mod requests;
pub mod responses;

pub use enums::{LeadSource, LeadStatus, Priority};
pub use requests::*;
pub use responses::*;
