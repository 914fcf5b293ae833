// Resume CRUD: validation at the boundary, storage behind `ResumeStore`,
// swappable scoring and a Markdown export.

pub mod export;
pub mod handlers;
pub mod scoring;
pub mod store;
pub mod validation;
