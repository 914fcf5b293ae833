// Mock identity. No credentials are verified; a cookie value is looked up
// in a `SessionStore` and the matching stand-in user is returned.

pub mod handlers;
pub mod session;
