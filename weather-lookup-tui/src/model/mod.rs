//! Model 层：应用状态

mod app;

pub use app::App;
