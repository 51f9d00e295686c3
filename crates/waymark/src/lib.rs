mod app;

pub use app::start_waymark;
