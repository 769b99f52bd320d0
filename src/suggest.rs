mod highlight;
pub mod suggest_render;
mod suggest_state;
mod widget;

pub use highlight::{Segment, highlight_segments};
pub use suggest_state::SuggestState;
pub use widget::SuggestionWidget;
