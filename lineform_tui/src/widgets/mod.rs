mod bit_axis;
mod dropdown;
mod key_maps;
mod key_maps_help_bar;
mod line_edit;
mod message_box;
mod waveform;

pub use bit_axis::BitAxis;
pub use dropdown::DropDown;
pub use dropdown::DropDownState;
pub use key_maps::KeyDesc;
pub use key_maps::KeyId;
pub use key_maps::KeyMap;
pub use key_maps::KeyMaps;
pub use key_maps_help_bar::KeyMapsHelpBar;
pub use line_edit::LineEdit;
pub use line_edit::LineEditState;
pub use message_box::MessageBox;
pub use waveform::Waveform;
