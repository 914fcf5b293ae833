// Static content tables: careers and the learning tracks that prepare for them.

pub mod careers;
pub mod handlers;
pub mod tracks;
