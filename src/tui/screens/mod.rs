//! TUI screens

mod dashboard;
mod detail;
mod interview;
mod landing;
mod results;
mod upload;

pub use dashboard::DashboardScreen;
pub use detail::DetailScreen;
pub use interview::InterviewScreen;
pub use landing::LandingScreen;
pub use results::ResultsScreen;
pub use upload::{UploadAction, UploadScreen};
