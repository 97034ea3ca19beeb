mod home;
pub use home::Home;

mod runs;
pub use runs::Runs;
