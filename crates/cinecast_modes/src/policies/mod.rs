//! Built-in selection policies.

mod best_of;
mod random_page;
mod random_poster;
mod relaxed;

pub use best_of::BestOf;
pub use random_page::RandomPage;
pub use random_poster::RandomPoster;
pub use relaxed::Relaxed;
