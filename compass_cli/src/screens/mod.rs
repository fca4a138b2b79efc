/// Screen module exports

pub mod dashboard;
pub mod home;
pub mod onboarding;
pub mod roadmap;

pub use dashboard::{DashboardScreen, DashboardScreenState};
pub use home::HomeScreen;
pub use onboarding::{FormField, FormStep, OnboardingForm, OnboardingState};
pub use roadmap::{RoadmapScreen, RoadmapScreenState};
