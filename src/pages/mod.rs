//! Pages, one per route.

mod auth_page;
mod contact;
mod dashboard;
mod devices;
mod landing;
mod not_found;
mod projects;
mod public;
mod tickets;

pub use auth_page::AuthPage;
pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use devices::DevicesPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use tickets::TicketsPage;
