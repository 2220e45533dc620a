//! Host integration: focus events and render diagnostics.
//!
//! The callback registries are process-global, so everything that registers
//! a callback lives in one test function.

use keydrill::{
    Attrs, ColorMode, LogLevel, TextDisplay, annotate, set_event_callback, set_log_callback,
};
use std::sync::{Arc, Mutex};

#[test]
fn focus_blur_and_render_reach_the_host() {
    let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let logs: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::new(Mutex::new(Vec::new()));

    let events_sink = Arc::clone(&events);
    set_event_callback(move |name, _data| {
        events_sink.lock().unwrap().push(name.to_string());
    });
    let logs_sink = Arc::clone(&logs);
    set_log_callback(move |level, message| {
        logs_sink.lock().unwrap().push((level, message.to_string()));
    });

    let mut display = TextDisplay::default();
    display.set_chars(annotate("abc def", Attrs::Normal));

    display.focus();
    display.focus(); // no event on an already-focused display
    display.blur();
    display.blur();
    display.focus();

    assert_eq!(
        *events.lock().unwrap(),
        vec!["focus".to_string(), "blur".to_string(), "focus".to_string()]
    );

    let rows = display.render_ansi(4, ColorMode::TrueColor);
    assert_eq!(rows.len(), 2);

    let logged = logs.lock().unwrap();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].0, LogLevel::Debug);
    assert!(logged[0].1.contains("2 rows"));
    assert!(logged[0].1.contains("4 cols"));
}
