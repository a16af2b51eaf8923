//! Console logging.
//!
//! Events recorded through `tracing` are written to the browser console,
//! one `console.*` call per event at the matching severity. On non-wasm
//! targets (host tests) the same lines go to stderr.

use std::fmt::{self, Write as _};
use std::sync::Once;

use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

static INIT: Once = Once::new();

/// Installs the console subscriber as the global default.
///
/// Only the first call has an effect; later calls (and pages where the host
/// already installed a subscriber) are ignored.
pub fn init_logging(level: LevelFilter) {
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::registry().with(level).with(ConsoleLayer);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// A [`Layer`] that formats each event as one line and writes it to the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut line = LineVisitor::default();
        event.record(&mut line);
        write_console(*meta.level(), &line.finish(meta.target()));
    }
}

/// Collects an event's message and fields into `message key=value ...`.
#[derive(Debug, Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self, target: &str) -> String {
        format!("[{target}] {}{}", self.message, self.fields)
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use web_sys::console;

    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&line),
        Level::WARN => console::warn_1(&line),
        Level::INFO => console::info_1(&line),
        _ => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    eprintln!("{level:>5} {line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::field::FieldSet;
    use tracing::{Metadata, callsite::Identifier, metadata::Kind};

    struct TestCallsite;
    static CALLSITE: TestCallsite = TestCallsite;
    static FIELDS: &[&str] = &["message", "rows"];
    static META: Metadata<'static> = Metadata::new(
        "test",
        "pagefx::tables",
        Level::DEBUG,
        None,
        None,
        None,
        FieldSet::new(FIELDS, Identifier(&CALLSITE)),
        Kind::EVENT,
    );

    impl tracing::callsite::Callsite for TestCallsite {
        fn set_interest(&self, _: tracing::subscriber::Interest) {}
        fn metadata(&self) -> &Metadata<'_> {
            &META
        }
    }

    #[test]
    fn test_line_format() {
        let fields = META.fields();
        let mut visitor = LineVisitor::default();
        visitor.record_str(&fields.field("message").unwrap(), "wrapped table");
        visitor.record_debug(&fields.field("rows").unwrap(), &12);
        assert_eq!(visitor.finish("pagefx::tables"), "[pagefx::tables] wrapped table rows=12");
    }

    #[test]
    fn test_debug_message() {
        let fields = META.fields();
        let mut visitor = LineVisitor::default();
        visitor.record_debug(
            &fields.field("message").unwrap(),
            &format_args!("sized {} charts", 3),
        );
        assert_eq!(visitor.finish("x"), "[x] sized 3 charts");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(LevelFilter::WARN);
        init_logging(LevelFilter::TRACE);
        tracing::warn!(attempt = 2, "still one subscriber");
    }
}
