// CV documents: plain-text extraction ahead of matching.

pub mod extract;
pub mod handlers;
