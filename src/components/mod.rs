pub mod app;
pub mod event_list;
pub mod plane_view;
pub mod stand_list;
pub mod top_bar;

pub use app::App;
pub use event_list::EventList;
pub use plane_view::PlaneView;
pub use stand_list::StandList;
pub use top_bar::TopBar;
