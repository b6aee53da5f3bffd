//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod generate;
pub mod scripts;
pub mod seo;
pub mod settings;
pub mod thumbnails;
pub mod titles;

pub use dashboard::Dashboard;
pub use generate::Generate;
pub use scripts::Scripts;
pub use seo::Seo;
pub use settings::Settings;
pub use thumbnails::Thumbnails;
pub use titles::Titles;
