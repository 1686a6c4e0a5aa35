pub mod app;
pub mod plain;
pub mod widgets;

pub use app::MatrixApp;
pub use plain::render_plain;
