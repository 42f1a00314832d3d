//! The suggestions text field control.
//!
//! [`SuggestionsField`] is the behavior core of a text input with inline
//! autocomplete: it owns the configuration, the optional suggestion label
//! and suggestions content view, the layout policy inputs and the keyboard
//! animation coordinator, and it re-emits edit lifecycle events to the host
//! through signals and an optional-callback configuration struct.
//!
//! The field holds no toolkit handles. A thin host adapter feeds it:
//!
//! - layout requests (`text_rect`, `editing_rect`, ...), called with the
//!   field's bounds whenever the host lays out,
//! - edit lifecycle events (`begin_editing`, `end_editing`, `set_text`),
//! - keyboard notifications (`handle_keyboard_will_show/hide`),
//! - animation completions (`animation_finished`).
//!
//! and applies the rectangles and [`SlideAnimation`] requests it gets back.
//!
//! # Example
//!
//! ```
//! use lumen_typeahead::field::SuggestionsField;
//! use lumen_typeahead::geometry::Rect;
//!
//! let mut field = SuggestionsField::new();
//! field.set_placeholder("Search phones");
//! field.text_changed.connect(|text| {
//!     println!("filter suggestions for: {}", text);
//! });
//!
//! field.begin_editing();
//! field.set_text("iPhone");
//! let text_rect = field.editing_rect(Rect::new(0.0, 0.0, 200.0, 40.0));
//! assert!(text_rect.width() <= 200.0);
//! ```

use std::fmt;

use lumen_typeahead_core::Signal;

use crate::animation::SlideAnimation;
use crate::config::FieldConfig;
use crate::filter::{Candidate, CandidateModel};
use crate::geometry::{Rect, Size};
use crate::keyboard::{
    AnimationCoordinator, ContentViewTraits, KeyboardAnimationTraits, KeyboardNotification,
};
use crate::layout::{LayoutPolicy, UNBOUNDED_CONTENT_HEIGHT, content_view_frame};
use crate::metrics::{GraphemeMetrics, TextMetrics};
use crate::view::{SuggestionLabel, SuggestionsContentView};

/// Callback overriding the proposed content view frame.
pub type ProposeFrameFn = Box<dyn FnMut(&ContentViewTraits) -> Option<Rect>>;
/// Callback observing a keyboard appearance with the proposed frame.
pub type KeyboardShowFn = Box<dyn FnMut(&ContentViewTraits, &KeyboardAnimationTraits)>;
/// Callback observing a keyboard disappearance.
pub type KeyboardHideFn = Box<dyn FnMut(&KeyboardAnimationTraits)>;
/// Callback receiving a completion it must invoke to apply the default
/// side effect (detaching the content view).
pub type CompletionHandlerFn = Box<dyn FnMut(&mut dyn FnMut())>;
/// Callback receiving the new text and a completion that reloads the
/// content view.
pub type TextDidChangeFn = Box<dyn FnMut(&str, &mut dyn FnMut())>;
/// Callback deciding whether a forced layout pass is acceptable.
pub type ShouldForceLayoutFn = Box<dyn Fn() -> bool>;
/// Callback executing a slide animation on the host's animation engine.
pub type RunAnimationFn = Box<dyn FnMut(&SlideAnimation)>;

/// Optional host callbacks configuring field behavior.
///
/// Every field is optional; an absent callback falls back to the documented
/// default. This replaces an optional-method delegate: hosts fill in only
/// the hooks they care about.
#[derive(Default)]
pub struct FieldCallbacks {
    /// Override the frame proposed for the suggestions content view.
    /// Default: use the proposal unchanged.
    pub propose_content_view_frame: Option<ProposeFrameFn>,
    /// Observe keyboard appearance along with the proposed content frame.
    /// Default: no-op.
    pub keyboard_will_show: Option<KeyboardShowFn>,
    /// Observe keyboard disappearance. Default: no-op.
    pub keyboard_will_hide: Option<KeyboardHideFn>,
    /// Take over hiding the content view when editing ends. The completion
    /// detaches the view; invoke it once any custom transition is done, or
    /// call [`SuggestionsField::detach_content_view`] later for a deferred
    /// teardown. Default: detach immediately.
    pub hide_content_view: Option<CompletionHandlerFn>,
    /// Take over reacting to text changes (typically: filter the data
    /// source). Receives the new text and a completion that reloads the
    /// content view; invoke it once the data is ready, or call
    /// [`SuggestionsField::reload_content_view`] later. Default: reload
    /// immediately.
    pub text_did_change: Option<TextDidChangeFn>,
    /// Veto the forced layout pass used to read the content view's natural
    /// height (expensive with self-sizing rows). Default: allow it.
    pub should_force_layout: Option<ShouldForceLayoutFn>,
    /// Execute a slide animation. The host must report completion through
    /// [`SuggestionsField::animation_finished`] with the request's sequence
    /// number. Default: jump to the end state and complete immediately.
    pub run_animation: Option<RunAnimationFn>,
}

/// External supplier of the field's suggestion views.
///
/// The field never constructs its views; a data source hands them over once
/// before display.
pub trait FieldDataSource {
    /// The content view presenting matching candidates.
    fn suggestions_content_view(&mut self) -> Box<dyn SuggestionsContentView>;

    /// The inline label showing the proposed suggestion, if any.
    fn suggestion_label(&mut self) -> Option<Box<dyn SuggestionLabel>> {
        None
    }
}

/// A text input behavior with inline suggestion label and attached
/// suggestions content view.
pub struct SuggestionsField {
    config: FieldConfig,
    text: String,
    placeholder: String,
    editing: bool,
    /// The field's frame in window coordinates, supplied by the host.
    window_frame: Rect,
    /// The screen bounds, supplied by the host.
    screen_bounds: Rect,
    metrics: Box<dyn TextMetrics>,
    label: Option<Box<dyn SuggestionLabel>>,
    content_view: Option<Box<dyn SuggestionsContentView>>,
    coordinator: AnimationCoordinator,
    callbacks: FieldCallbacks,

    /// Signal emitted when the field text changes.
    pub text_changed: Signal<String>,
    /// Signal emitted when editing begins.
    pub editing_began: Signal<()>,
    /// Signal emitted when editing ends.
    pub editing_ended: Signal<()>,
}

impl Default for SuggestionsField {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionsField {
    /// Create a field with the default configuration and grapheme-based
    /// text metrics.
    pub fn new() -> Self {
        Self::with_config(FieldConfig::default())
    }

    /// Create a field with the given configuration.
    pub fn with_config(config: FieldConfig) -> Self {
        Self {
            config,
            text: String::new(),
            placeholder: String::new(),
            editing: false,
            window_frame: Rect::ZERO,
            screen_bounds: Rect::ZERO,
            metrics: Box::new(GraphemeMetrics::default()),
            label: None,
            content_view: None,
            coordinator: AnimationCoordinator::new(),
            callbacks: FieldCallbacks::default(),
            text_changed: Signal::new(),
            editing_began: Signal::new(),
            editing_ended: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the field configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Replace the field configuration.
    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
    }

    /// Replace the text measurer used by the layout policy.
    pub fn set_metrics(&mut self, metrics: Box<dyn TextMetrics>) {
        self.metrics = metrics;
    }

    /// Replace the host callbacks.
    pub fn set_callbacks(&mut self, callbacks: FieldCallbacks) {
        self.callbacks = callbacks;
    }

    /// Set the field's frame in window coordinates.
    ///
    /// The host keeps this current across layout passes; the content view
    /// hangs from this frame's bottom edge.
    pub fn set_window_frame(&mut self, frame: Rect) {
        self.window_frame = frame;
    }

    /// The field's frame in window coordinates.
    pub fn window_frame(&self) -> Rect {
        self.window_frame
    }

    /// Set the screen bounds used for keyboard-hidden detection and as the
    /// fallback keyboard edge before any keyboard has been observed.
    pub fn set_screen_bounds(&mut self, bounds: Rect) {
        self.screen_bounds = bounds;
    }

    /// The screen bounds supplied by the host.
    pub fn screen_bounds(&self) -> Rect {
        self.screen_bounds
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// The field's current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the field currently contains any text.
    pub fn contains_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// The placeholder shown while the field is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Replace the field text.
    ///
    /// Emits [`text_changed`](Self::text_changed), then gives
    /// [`FieldCallbacks::text_did_change`] the chance to filter the data
    /// source before the content view reloads. Without that callback the
    /// content view reloads immediately.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.text_changed.emit(self.text.clone());

        let mut invoked = self.callbacks.text_did_change.is_none();
        if let Some(callback) = self.callbacks.text_did_change.as_mut() {
            let mut completion = || invoked = true;
            callback(&self.text, &mut completion);
        }
        if invoked {
            self.reload_content_view();
        }
    }

    /// Filter a candidate model by the field's current text, honoring the
    /// configured case sensitivity.
    pub fn matching_candidates(&self, model: &dyn CandidateModel) -> Vec<Candidate> {
        model.candidates(&self.text, self.config.case_sensitivity)
    }

    // =========================================================================
    // Suggestion Views
    // =========================================================================

    /// Install the suggestion label. Takes effect on the next layout pass.
    pub fn set_suggestion_label(&mut self, label: Box<dyn SuggestionLabel>) {
        self.label = Some(label);
    }

    /// Remove and return the suggestion label.
    pub fn take_suggestion_label(&mut self) -> Option<Box<dyn SuggestionLabel>> {
        self.label.take()
    }

    /// The installed suggestion label, if any.
    pub fn suggestion_label(&self) -> Option<&dyn SuggestionLabel> {
        self.label.as_deref()
    }

    /// Mutable access to the installed suggestion label, e.g. to update its
    /// text when the proposed suggestion changes.
    pub fn suggestion_label_mut(&mut self) -> Option<&mut (dyn SuggestionLabel + 'static)> {
        self.label.as_deref_mut()
    }

    /// Install the suggestions content view. Takes effect on the next edit
    /// or keyboard cycle.
    pub fn set_content_view(&mut self, view: Box<dyn SuggestionsContentView>) {
        self.content_view = Some(view);
    }

    /// Remove and return the suggestions content view.
    pub fn take_content_view(&mut self) -> Option<Box<dyn SuggestionsContentView>> {
        self.content_view.take()
    }

    /// The installed content view, if any.
    pub fn content_view(&self) -> Option<&dyn SuggestionsContentView> {
        self.content_view.as_deref()
    }

    /// Mutable access to the installed content view.
    pub fn content_view_mut(&mut self) -> Option<&mut (dyn SuggestionsContentView + 'static)> {
        self.content_view.as_deref_mut()
    }

    /// Pull the suggestion views from a data source.
    pub fn prepare_for_display(&mut self, source: &mut dyn FieldDataSource) {
        self.label = source.suggestion_label();
        self.content_view = Some(source.suggestions_content_view());
    }

    /// Reload the content view's rows.
    pub fn reload_content_view(&mut self) {
        if let Some(view) = self.content_view.as_mut() {
            view.reload();
        }
    }

    /// Detach the content view from the view hierarchy.
    ///
    /// Called automatically when editing ends (unless
    /// [`FieldCallbacks::hide_content_view`] defers it) and when a hide
    /// animation completes.
    pub fn detach_content_view(&mut self) {
        if let Some(view) = self.content_view.as_mut() {
            view.detach();
        }
    }

    // =========================================================================
    // Layout Callbacks
    // =========================================================================

    /// The rectangle non-editing text renders into.
    pub fn text_rect(&self, bounds: Rect) -> Rect {
        LayoutPolicy::new(&self.config, self.metrics.as_ref()).text_rect(bounds)
    }

    /// The rectangle the placeholder renders into.
    ///
    /// Shares the editing computation so the placeholder never collides
    /// with the suggestion label.
    pub fn placeholder_rect(&mut self, bounds: Rect) -> Rect {
        self.editing_rect(bounds)
    }

    /// The rectangle editing text renders into.
    ///
    /// Also positions, shows or hides the suggestion label according to the
    /// computed [`EditingLayout`](crate::layout::EditingLayout).
    pub fn editing_rect(&mut self, bounds: Rect) -> Rect {
        let (label_text, label_size) = match self.label.as_ref() {
            Some(label) => {
                let available = bounds.inset_by(self.config.text_insets);
                (label.text().to_string(), label.preferred_size(available.size))
            }
            None => (String::new(), Size::ZERO),
        };

        let policy = LayoutPolicy::new(&self.config, self.metrics.as_ref());
        let layout =
            policy.editing_layout(bounds, &self.text, &self.placeholder, &label_text, label_size);

        if let Some(label) = self.label.as_mut() {
            if layout.label_visible {
                label.set_frame(layout.label_frame);
                label.attach();
            } else {
                label.detach();
            }
        }

        layout.text_rect
    }

    /// The border rectangle. Identity: the host default applies.
    pub fn border_rect(&self, bounds: Rect) -> Rect {
        bounds
    }

    /// The clear button rectangle. Identity: the host default applies.
    pub fn clear_button_rect(&self, bounds: Rect) -> Rect {
        bounds
    }

    /// The left overlay view rectangle. Identity: the host default applies.
    pub fn left_view_rect(&self, bounds: Rect) -> Rect {
        bounds
    }

    /// The right overlay view rectangle. Identity: the host default applies.
    pub fn right_view_rect(&self, bounds: Rect) -> Rect {
        bounds
    }

    // =========================================================================
    // Edit Lifecycle
    // =========================================================================

    /// Whether the field is currently being edited.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Handle the start of an edit session.
    ///
    /// The content view is positioned at zero height under the field and,
    /// with [`FieldConfig::attach_content_view`] set, attached to the view
    /// hierarchy so the keyboard animation can grow it into place.
    pub fn begin_editing(&mut self) {
        self.editing = true;
        tracing::debug!(target: "lumen_typeahead::field", "editing began");

        let proposal = self.content_frame_proposal();
        let attach = self.config.attach_content_view;
        if let Some(view) = self.content_view.as_mut() {
            view.set_frame(proposal.with_height(0.0));
            if attach {
                view.attach();
            }
        }

        self.editing_began.emit(());
    }

    /// Handle the end of an edit session.
    ///
    /// Hides the suggestion label immediately and tears the content view
    /// down through [`FieldCallbacks::hide_content_view`].
    pub fn end_editing(&mut self) {
        self.editing = false;
        tracing::debug!(target: "lumen_typeahead::field", "editing ended");

        if let Some(label) = self.label.as_mut() {
            label.detach();
        }

        let mut invoked = self.callbacks.hide_content_view.is_none();
        if let Some(callback) = self.callbacks.hide_content_view.as_mut() {
            let mut completion = || invoked = true;
            callback(&mut completion);
        }
        if invoked {
            self.detach_content_view();
        }

        self.editing_ended.emit(());
    }

    // =========================================================================
    // Keyboard Events
    // =========================================================================

    /// Handle a keyboard will-show notification.
    ///
    /// A payload missing any expected field is dropped entirely. Otherwise
    /// the suggestion views are attached at their initial state and a slide
    /// animation to the proposed content frame is issued.
    pub fn handle_keyboard_will_show(&mut self, notification: &KeyboardNotification) {
        let Some(traits) = KeyboardAnimationTraits::from_notification(notification) else {
            tracing::debug!(
                target: "lumen_typeahead::keyboard",
                "dropping malformed keyboard show notification"
            );
            return;
        };
        self.coordinator.record(&traits);

        if let Some(label) = self.label.as_mut() {
            label.set_opacity(0.0);
            label.attach();
        }
        if let Some(view) = self.content_view.as_mut() {
            view.attach();
        }

        let target = self.content_frame_proposal();
        if let Some(view) = self.content_view.as_mut() {
            view.set_frame(target.with_height(0.0));
        }

        let animation = self.coordinator.begin_appearance(target, &traits);
        if let Some(callback) = self.callbacks.keyboard_will_show.as_mut() {
            callback(&ContentViewTraits::new(target), &traits);
        }
        self.run_animation(animation);
    }

    /// Handle a keyboard will-hide notification.
    ///
    /// A payload missing any expected field is dropped entirely. Otherwise
    /// a slide animation from the content view's current frame to its
    /// zero-height copy is issued; the views detach when the host reports
    /// that animation's completion.
    pub fn handle_keyboard_will_hide(&mut self, notification: &KeyboardNotification) {
        let Some(traits) = KeyboardAnimationTraits::from_notification(notification) else {
            tracing::debug!(
                target: "lumen_typeahead::keyboard",
                "dropping malformed keyboard hide notification"
            );
            return;
        };
        self.coordinator.record(&traits);

        let current = self
            .content_view
            .as_ref()
            .map(|view| view.frame())
            .unwrap_or(Rect::ZERO);

        let animation = self.coordinator.begin_disappearance(current, &traits);
        if let Some(callback) = self.callbacks.keyboard_will_hide.as_mut() {
            callback(&traits);
        }
        self.run_animation(animation);
    }

    /// Report the completion of a slide animation.
    ///
    /// Only the pending hide animation's completion detaches the suggestion
    /// views; stale sequences, superseded by a newer animation, are ignored.
    pub fn animation_finished(&mut self, sequence: u64) {
        if self.coordinator.finish(sequence) {
            tracing::debug!(
                target: "lumen_typeahead::field",
                sequence,
                "hide animation complete, detaching suggestion views"
            );
            if let Some(label) = self.label.as_mut() {
                label.detach();
            }
            self.detach_content_view();
        }
    }

    /// The last keyboard frame observed from a decoded notification.
    pub fn keyboard_frame(&self) -> Option<Rect> {
        self.coordinator.keyboard_frame()
    }

    /// The frame currently proposed for the suggestions content view, after
    /// any host override.
    pub fn proposed_content_view_frame(&mut self) -> Rect {
        self.content_frame_proposal()
    }

    // =========================================================================
    // Private interface
    // =========================================================================

    fn content_frame_proposal(&mut self) -> Rect {
        let force_layout = self
            .callbacks
            .should_force_layout
            .as_ref()
            .is_none_or(|callback| callback());

        let natural_height = match self.content_view.as_mut() {
            Some(view) => {
                if force_layout {
                    view.perform_layout();
                    view.content_size().height
                } else {
                    UNBOUNDED_CONTENT_HEIGHT
                }
            }
            None => 0.0,
        };

        let keyboard_top = self.coordinator.keyboard_top(self.screen_bounds);
        let mut proposal = content_view_frame(self.window_frame, keyboard_top, natural_height);

        if let Some(callback) = self.callbacks.propose_content_view_frame.as_mut() {
            if let Some(frame) = callback(&ContentViewTraits::new(proposal)) {
                proposal = frame;
            }
        }
        proposal
    }

    fn run_animation(&mut self, animation: SlideAnimation) {
        tracing::debug!(
            target: "lumen_typeahead::keyboard",
            sequence = animation.sequence,
            phase = ?animation.phase,
            "requesting slide animation"
        );

        if let Some(callback) = self.callbacks.run_animation.as_mut() {
            callback(&animation);
        } else {
            // No animation engine installed: jump to the end state.
            if let Some(view) = self.content_view.as_mut() {
                view.set_frame(animation.content_end);
            }
            if let Some(label) = self.label.as_mut() {
                label.set_opacity(animation.label_opacity_end);
            }
            self.animation_finished(animation.sequence);
        }
    }
}

impl fmt::Debug for SuggestionsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionsField")
            .field("text", &self.text)
            .field("placeholder", &self.placeholder)
            .field("editing", &self.editing)
            .field("has_label", &self.label.is_some())
            .field("has_content_view", &self.content_view.is_some())
            .field("keyboard_frame", &self.coordinator.keyboard_frame())
            .finish()
    }
}
