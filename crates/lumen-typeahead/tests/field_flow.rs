//! Integration coverage for the full edit and keyboard show/hide flow.
//!
//! Drives a [`SuggestionsField`] the way a host adapter would: mock label
//! and content view collaborators, a captured animation queue standing in
//! for the host animation engine, and explicit completion reports.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lumen_typeahead::field::{FieldCallbacks, SuggestionsField};
use lumen_typeahead::geometry::{Rect, Size};
use lumen_typeahead::keyboard::KeyboardNotification;
use lumen_typeahead::view::{SuggestionLabel, SuggestionsContentView};
use lumen_typeahead::{SlideAnimation, SlidePhase};

#[derive(Debug, Default)]
struct LabelState {
    frame: Rect,
    opacity: f32,
    attached: bool,
}

/// Mock label sharing its display state with the test through an `Rc`.
///
/// The text itself lives in the instance the field owns and is reached
/// through [`SuggestionsField::suggestion_label_mut`].
#[derive(Clone, Default)]
struct MockLabel {
    text: String,
    state: Rc<RefCell<LabelState>>,
}

impl SuggestionLabel for MockLabel {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn preferred_size(&self, _fits: Size) -> Size {
        Size::new(8.0 * self.text.len() as f32, 18.0)
    }

    fn frame(&self) -> Rect {
        self.state.borrow().frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.state.borrow_mut().frame = frame;
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.state.borrow_mut().opacity = opacity;
    }

    fn attach(&mut self) {
        self.state.borrow_mut().attached = true;
    }

    fn detach(&mut self) {
        self.state.borrow_mut().attached = false;
    }

    fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }
}

#[derive(Debug)]
struct ContentState {
    frame: Rect,
    rows: usize,
    row_height: f32,
    attached: bool,
    reloads: usize,
    layout_passes: usize,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            frame: Rect::ZERO,
            rows: 13,
            row_height: 24.0,
            attached: false,
            reloads: 0,
            layout_passes: 0,
        }
    }
}

#[derive(Clone, Default)]
struct MockContentView {
    state: Rc<RefCell<ContentState>>,
}

impl SuggestionsContentView for MockContentView {
    fn frame(&self) -> Rect {
        self.state.borrow().frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.state.borrow_mut().frame = frame;
    }

    fn content_size(&self) -> Size {
        let state = self.state.borrow();
        Size::new(state.frame.width(), state.rows as f32 * state.row_height)
    }

    fn reload(&mut self) {
        self.state.borrow_mut().reloads += 1;
    }

    fn perform_layout(&mut self) {
        self.state.borrow_mut().layout_passes += 1;
    }

    fn attach(&mut self) {
        self.state.borrow_mut().attached = true;
    }

    fn detach(&mut self) {
        self.state.borrow_mut().attached = false;
    }

    fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }
}

struct Harness {
    field: SuggestionsField,
    label: MockLabel,
    content: MockContentView,
    animations: Rc<RefCell<Vec<SlideAnimation>>>,
}

fn harness() -> Harness {
    let label = MockLabel::default();
    let content = MockContentView::default();
    let animations: Rc<RefCell<Vec<SlideAnimation>>> = Rc::default();

    let mut field = SuggestionsField::new();
    field.set_window_frame(Rect::new(20.0, 80.0, 280.0, 40.0));
    field.set_screen_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
    field.set_suggestion_label(Box::new(label.clone()));
    field.set_content_view(Box::new(content.clone()));

    let queue = animations.clone();
    field.set_callbacks(FieldCallbacks {
        run_animation: Some(Box::new(move |animation| {
            queue.borrow_mut().push(*animation);
        })),
        ..Default::default()
    });

    Harness {
        field,
        label,
        content,
        animations,
    }
}

fn show_notification() -> KeyboardNotification {
    KeyboardNotification::new(
        Rect::new(0.0, 264.0, 320.0, 216.0),
        Duration::from_millis(250),
        0,
    )
}

fn hide_notification() -> KeyboardNotification {
    KeyboardNotification::new(
        Rect::new(0.0, 480.0, 320.0, 216.0),
        Duration::from_millis(250),
        0,
    )
}

#[test]
fn keyboard_show_attaches_views_and_requests_growth() {
    let mut h = harness();

    h.field.begin_editing();
    assert!(h.content.state.borrow().attached);
    assert_eq!(h.content.state.borrow().frame.height(), 0.0);

    h.field.handle_keyboard_will_show(&show_notification());

    assert!(h.label.state.borrow().attached);
    assert_eq!(h.label.state.borrow().opacity, 0.0);

    let animations = h.animations.borrow();
    assert_eq!(animations.len(), 1);
    let show = animations[0];
    assert_eq!(show.phase, SlidePhase::Appearing);

    // Content hangs below the field, spanning its width
    assert_eq!(show.content_end.left(), 20.0);
    assert_eq!(show.content_end.top(), 120.0);
    assert_eq!(show.content_end.width(), 280.0);
    // 13 rows * 24 = 312 natural, clamped to 264 - 120 = 144 of keyboard space
    assert_eq!(show.content_end.height(), 144.0);
    assert_eq!(show.content_start, show.content_end.with_height(0.0));
    assert_eq!((show.label_opacity_start, show.label_opacity_end), (0.0, 1.0));

    // The host applies the start frame before the first animation frame
    assert_eq!(h.content.state.borrow().frame.height(), 0.0);
}

#[test]
fn keyboard_hide_detaches_views_on_completion() {
    let mut h = harness();

    h.field.begin_editing();
    h.field.handle_keyboard_will_show(&show_notification());
    let show = h.animations.borrow()[0];

    // Host finishes the appearance; views stay attached
    h.content.state.borrow_mut().frame = show.content_end;
    h.field.animation_finished(show.sequence);
    assert!(h.content.state.borrow().attached);
    assert!(h.label.state.borrow().attached);

    h.field.handle_keyboard_will_hide(&hide_notification());
    let hide = h.animations.borrow()[1];
    assert_eq!(hide.phase, SlidePhase::Disappearing);
    assert_eq!(hide.content_start, show.content_end);
    assert_eq!(hide.content_end.height(), 0.0);
    assert_eq!((hide.label_opacity_start, hide.label_opacity_end), (1.0, 0.0));

    // Views stay put until the completion arrives
    assert!(h.content.state.borrow().attached);
    h.field.animation_finished(hide.sequence);
    assert!(!h.content.state.borrow().attached);
    assert!(!h.label.state.borrow().attached);
}

#[test]
fn show_arriving_mid_hide_discards_stale_completion() {
    let mut h = harness();

    h.field.begin_editing();
    h.field.handle_keyboard_will_show(&show_notification());
    h.field.handle_keyboard_will_hide(&hide_notification());
    // A new show interrupts before the hide completes
    h.field.handle_keyboard_will_show(&show_notification());

    let hide = h.animations.borrow()[1];
    let reshow = h.animations.borrow()[2];

    // The stale hide completion must not tear the views down
    h.field.animation_finished(hide.sequence);
    assert!(h.content.state.borrow().attached);
    assert!(h.label.state.borrow().attached);

    // Nor does the appearance completion
    h.field.animation_finished(reshow.sequence);
    assert!(h.content.state.borrow().attached);
}

#[test]
fn malformed_notifications_are_dropped_without_side_effects() {
    let mut h = harness();
    h.field.begin_editing();

    let malformed = KeyboardNotification {
        duration: None,
        ..show_notification()
    };
    h.field.handle_keyboard_will_show(&malformed);

    assert_eq!(h.field.keyboard_frame(), None);
    assert!(h.animations.borrow().is_empty());
    assert!(!h.label.state.borrow().attached);
}

#[test]
fn text_change_reload_defers_to_callback() {
    let mut h = harness();

    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let seen_clone = seen.clone();
    let queue = h.animations.clone();
    h.field.set_callbacks(FieldCallbacks {
        run_animation: Some(Box::new(move |animation| {
            queue.borrow_mut().push(*animation);
        })),
        text_did_change: Some(Box::new(move |text, completion| {
            seen_clone.borrow_mut().push(text.to_string());
            if text != "defer" {
                completion();
            }
        })),
        ..Default::default()
    });

    h.field.set_text("iPhone");
    assert_eq!(h.content.state.borrow().reloads, 1);
    assert_eq!(seen.borrow().as_slice(), ["iPhone"]);

    // The callback defers: no reload until the host asks for one
    h.field.set_text("defer");
    assert_eq!(h.content.state.borrow().reloads, 1);
    h.field.reload_content_view();
    assert_eq!(h.content.state.borrow().reloads, 2);
}

#[test]
fn text_change_without_callback_reloads_immediately() {
    let mut h = harness();

    h.field.set_text("iPhone");
    assert_eq!(h.content.state.borrow().reloads, 1);
}

#[test]
fn end_editing_tears_content_down_through_callback() {
    let mut h = harness();
    h.field.begin_editing();
    assert!(h.content.state.borrow().attached);

    // Default behavior: detach immediately
    h.field.end_editing();
    assert!(!h.content.state.borrow().attached);

    // With a deferring callback the view survives until the host decides
    let invoked: Rc<RefCell<bool>> = Rc::default();
    let invoked_clone = invoked.clone();
    h.field.set_callbacks(FieldCallbacks {
        hide_content_view: Some(Box::new(move |_completion| {
            *invoked_clone.borrow_mut() = true;
        })),
        ..Default::default()
    });

    h.field.begin_editing();
    h.field.end_editing();
    assert!(*invoked.borrow());
    assert!(h.content.state.borrow().attached);

    h.field.detach_content_view();
    assert!(!h.content.state.borrow().attached);
}

#[test]
fn forced_layout_veto_clamps_to_keyboard_space() {
    let mut h = harness();

    let queue = h.animations.clone();
    h.field.set_callbacks(FieldCallbacks {
        run_animation: Some(Box::new(move |animation| {
            queue.borrow_mut().push(*animation);
        })),
        should_force_layout: Some(Box::new(|| false)),
        ..Default::default()
    });

    h.field.handle_keyboard_will_show(&show_notification());

    // The unbounded sentinel still collapses to the available space
    let show = h.animations.borrow()[0];
    assert_eq!(show.content_end.height(), 144.0);
    // And the vetoed layout pass never ran
    assert_eq!(h.content.state.borrow().layout_passes, 0);
}

#[test]
fn propose_callback_overrides_content_frame() {
    let mut h = harness();

    let queue = h.animations.clone();
    h.field.set_callbacks(FieldCallbacks {
        run_animation: Some(Box::new(move |animation| {
            queue.borrow_mut().push(*animation);
        })),
        propose_content_view_frame: Some(Box::new(|traits| {
            // Pin the height, keep the rest of the proposal
            Some(traits.frame.with_height(100.0))
        })),
        ..Default::default()
    });

    h.field.handle_keyboard_will_show(&show_notification());
    let show = h.animations.borrow()[0];
    assert_eq!(show.content_end.height(), 100.0);
}

#[test]
fn prepare_for_display_pulls_views_from_data_source() {
    use lumen_typeahead::field::FieldDataSource;

    struct PhonesSource {
        label: MockLabel,
        content: MockContentView,
    }

    impl FieldDataSource for PhonesSource {
        fn suggestions_content_view(&mut self) -> Box<dyn SuggestionsContentView> {
            Box::new(self.content.clone())
        }

        fn suggestion_label(&mut self) -> Option<Box<dyn SuggestionLabel>> {
            Some(Box::new(self.label.clone()))
        }
    }

    let mut source = PhonesSource {
        label: MockLabel::default(),
        content: MockContentView::default(),
    };

    let mut field = SuggestionsField::new();
    assert!(field.content_view().is_none());

    field.prepare_for_display(&mut source);
    assert!(field.content_view().is_some());
    assert!(field.suggestion_label().is_some());

    // The installed view is live: reloads reach the source's shared state
    field.reload_content_view();
    assert_eq!(source.content.state.borrow().reloads, 1);
}

#[test]
fn no_animation_engine_jumps_to_end_state() {
    // Without a run_animation callback the field applies end states and
    // completes in place.
    let label = MockLabel::default();
    let content = MockContentView::default();

    let mut field = SuggestionsField::new();
    field.set_window_frame(Rect::new(20.0, 80.0, 280.0, 40.0));
    field.set_screen_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
    field.set_suggestion_label(Box::new(label.clone()));
    field.set_content_view(Box::new(content.clone()));

    field.handle_keyboard_will_show(&show_notification());
    assert_eq!(content.state.borrow().frame.height(), 144.0);
    assert_eq!(label.state.borrow().opacity, 1.0);
    assert!(content.state.borrow().attached);

    field.handle_keyboard_will_hide(&hide_notification());
    assert_eq!(content.state.borrow().frame.height(), 0.0);
    assert!(!content.state.borrow().attached);
    assert!(!label.state.borrow().attached);
}
