mod bit_input;
mod error_box;
mod info_window;
pub mod models;
mod root;
mod scheme_selector;
mod wave_viewer;

pub use bit_input::BitInput;
pub use error_box::ErrorBox;
pub use info_window::InfoWindow;
pub use root::Root;
pub use scheme_selector::SchemeSelector;
pub use wave_viewer::WaveViewer;
