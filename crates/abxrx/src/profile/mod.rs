//! Saved analysis profiles and their HTML export.

mod html;
mod model;
mod store;

pub use html::{export_html, render_html};
pub use model::{Profile, ProfileSummary};
pub use store::ProfileStore;
