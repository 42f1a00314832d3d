//! Lumen Typeahead - a toolkit-agnostic suggestions text field behavior.
//!
//! A text input behavior that shows an inline autocomplete suggestion label
//! and an attached list of matching candidates, coordinating layout and
//! appearance with on-screen keyboard show/hide animations. The crate holds
//! no toolkit handles: a thin host adapter feeds bounds, edit events and
//! keyboard notifications in, and applies the rectangles and animation
//! requests that come back out.
//!
//! # Example
//!
//! ```
//! use lumen_typeahead::field::SuggestionsField;
//! use lumen_typeahead::filter::{Candidate, CandidateListModel};
//! use lumen_typeahead::geometry::Rect;
//!
//! let model = CandidateListModel::new(vec![
//!     Candidate::new("iPhone 4", "iOS", 2010),
//!     Candidate::new("iPhone 5", "iOS", 2012),
//! ]);
//!
//! let mut field = SuggestionsField::new();
//! field.set_placeholder("Search phones");
//! field.set_window_frame(Rect::new(20.0, 80.0, 280.0, 40.0));
//! field.set_screen_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
//!
//! field.begin_editing();
//! field.set_text("2012");
//! let matches = field.matching_candidates(&model);
//! assert_eq!(matches[0].name, "iPhone 5");
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod field;
pub mod filter;
pub mod geometry;
pub mod keyboard;
pub mod layout;
pub mod metrics;
pub mod view;

pub use animation::{Easing, SlideAnimation, SlidePhase, ease, lerp_eased};
pub use config::FieldConfig;
pub use error::{FieldError, FieldResult};
pub use field::{FieldCallbacks, FieldDataSource, SuggestionsField};
pub use filter::{
    Candidate, CandidateListModel, CandidateModel, CaseSensitivity, filter_candidates,
    filter_candidates_with,
};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use keyboard::{
    AnimationCoordinator, ContentViewTraits, KeyboardAnimationTraits, KeyboardNotification,
};
pub use layout::{EditingLayout, LayoutPolicy, UNBOUNDED_CONTENT_HEIGHT, content_view_frame};
pub use metrics::{GraphemeMetrics, TextMetrics};
pub use view::{PlainLabel, SuggestionLabel, SuggestionsContentView};

pub use lumen_typeahead_core::{ConnectionGuard, ConnectionId, Signal};
