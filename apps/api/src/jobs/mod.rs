// Job postings as seen by the matcher: a read-only source plus the listing endpoint.

pub mod handlers;
pub mod source;
