//! Phone-catalog suggestions demo.
//!
//! Drives a [`SuggestionsField`] from a console "host": a fixed catalog of
//! phones backs the suggestions content view, typing filters the catalog,
//! and keyboard show/hide notifications produce slide animations that the
//! host samples frame by frame.
//!
//! Run with `cargo run --example phones`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use lumen_typeahead::field::{FieldCallbacks, SuggestionsField};
use lumen_typeahead::filter::{Candidate, filter_candidates};
use lumen_typeahead::geometry::{EdgeInsets, Rect, Size};
use lumen_typeahead::keyboard::KeyboardNotification;
use lumen_typeahead::view::{PlainLabel, SuggestionLabel, SuggestionsContentView};
use lumen_typeahead::{FieldConfig, SlideAnimation};

/// The phone catalog, oldest first.
fn phone_catalog() -> Vec<Candidate> {
    vec![
        Candidate::new("iPhone (1st Gen)", "iPhone OS", 2007),
        Candidate::new("iPhone 3G", "iOS", 2008),
        Candidate::new("iPhone 3GS", "iOS", 2009),
        Candidate::new("iPhone 4", "iOS", 2010),
        Candidate::new("iPhone 4S", "iOS", 2011),
        Candidate::new("iPhone 5", "iOS 10 Beta", 2012),
        Candidate::new("iPhone 5C", "iOS 10 Beta", 2013),
        Candidate::new("iPhone 5S", "iOS 10 Beta", 2013),
        Candidate::new("iPhone 6", "iOS 10 Beta", 2014),
        Candidate::new("iPhone 6 Plus", "iOS 10 Beta", 2014),
        Candidate::new("iPhone 6S", "iOS 10 Beta", 2015),
        Candidate::new("iPhone 6S Plus", "iOS 10 Beta", 2015),
        Candidate::new("iPhone SE", "iOS 10 Beta", 2016),
    ]
}

/// A console stand-in for a table of candidate rows.
#[derive(Clone)]
struct PhoneListView {
    rows: Arc<Mutex<Vec<Candidate>>>,
    frame: Rect,
    attached: bool,
}

impl PhoneListView {
    const ROW_HEIGHT: f32 = 44.0;

    fn new(rows: Arc<Mutex<Vec<Candidate>>>) -> Self {
        Self {
            rows,
            frame: Rect::ZERO,
            attached: false,
        }
    }
}

impl SuggestionsContentView for PhoneListView {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn content_size(&self) -> Size {
        let rows = self.rows.lock().unwrap();
        Size::new(self.frame.width(), rows.len() as f32 * Self::ROW_HEIGHT)
    }

    fn reload(&mut self) {
        let rows = self.rows.lock().unwrap();
        println!("  [list] reloaded {} rows:", rows.len());
        for row in rows.iter() {
            println!("  [list]   {} ({} - {})", row.name, row.detail, row.year);
        }
    }

    fn perform_layout(&mut self) {}

    fn attach(&mut self) {
        self.attached = true;
        println!("  [list] attached to window");
    }

    fn detach(&mut self) {
        self.attached = false;
        println!("  [list] removed from window");
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

/// The remaining text of the first matching candidate, shown inline.
fn suggestion_remainder(matches: &[Candidate], text: &str) -> String {
    matches
        .first()
        .and_then(|candidate| candidate.name.strip_prefix(text))
        .unwrap_or_default()
        .to_string()
}

fn sample_animation(animation: &SlideAnimation) {
    for step in [0.0, 0.5, 1.0] {
        let progress = animation.progress(Duration::from_secs_f32(
            animation.duration.as_secs_f32() * step,
        ));
        let frame = animation.content_frame_at(progress);
        println!(
            "  [host] animation #{} t={:.1}: height {:.1}, label opacity {:.2}",
            animation.sequence,
            step,
            frame.height(),
            animation.label_opacity_at(progress)
        );
    }
}

fn type_text(field: &mut SuggestionsField, catalog: &[Candidate], text: &str) {
    println!("typing {:?}", text);
    field.set_text(text);

    let matches = filter_candidates(catalog, text);
    let remainder = suggestion_remainder(&matches, text);
    if let Some(label) = field.suggestion_label_mut() {
        label.set_text(remainder);
    }

    let text_rect = field.editing_rect(Rect::new(0.0, 0.0, 280.0, 40.0));
    println!(
        "  [field] editing rect {:.0}x{:.0}, label {:?}",
        text_rect.width(),
        text_rect.height(),
        field.suggestion_label().map(|label| label.text().to_string())
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lumen_typeahead=debug")),
        )
        .init();

    let catalog = phone_catalog();
    let filtered = Arc::new(Mutex::new(catalog.clone()));

    let mut field = SuggestionsField::with_config(FieldConfig {
        text_insets: EdgeInsets::symmetric(8.0, 4.0),
        suggestion_spacing: 2.0,
        ..Default::default()
    });
    field.set_placeholder("Search phones");
    field.set_window_frame(Rect::new(20.0, 80.0, 280.0, 40.0));
    field.set_screen_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));

    field.set_suggestion_label(Box::new(PlainLabel::default()));
    field.set_content_view(Box::new(PhoneListView::new(filtered.clone())));

    field.text_changed.connect(|text| {
        println!("  [signal] text changed: {:?}", text);
    });

    // The host filters the catalog on text change, then lets the field
    // reload the list; animations are queued and completed explicitly.
    let animations: Arc<Mutex<Vec<SlideAnimation>>> = Arc::default();
    let filter_rows = filtered.clone();
    let filter_catalog = catalog.clone();
    let queue = animations.clone();
    field.set_callbacks(FieldCallbacks {
        text_did_change: Some(Box::new(move |text, completion| {
            *filter_rows.lock().unwrap() = filter_candidates(&filter_catalog, text);
            completion();
        })),
        run_animation: Some(Box::new(move |animation| {
            queue.lock().unwrap().push(*animation);
        })),
        ..Default::default()
    });

    println!("-- editing begins");
    field.begin_editing();

    println!("-- keyboard slides in");
    field.handle_keyboard_will_show(&KeyboardNotification::new(
        Rect::new(0.0, 264.0, 320.0, 216.0),
        Duration::from_millis(250),
        0,
    ));
    if let Some(show) = animations.lock().unwrap().pop() {
        sample_animation(&show);
        field.content_view_mut().unwrap().set_frame(show.content_end);
        field.animation_finished(show.sequence);
    }

    type_text(&mut field, &catalog, "iPhone");
    type_text(&mut field, &catalog, "iPhone 5");
    type_text(&mut field, &catalog, "2012");

    println!("-- keyboard slides out");
    field.handle_keyboard_will_hide(&KeyboardNotification::new(
        Rect::new(0.0, 480.0, 320.0, 216.0),
        Duration::from_millis(250),
        0,
    ));
    if let Some(hide) = animations.lock().unwrap().pop() {
        sample_animation(&hide);
        field.animation_finished(hide.sequence);
    }

    println!("-- editing ends");
    field.end_editing();
}
