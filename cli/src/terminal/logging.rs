use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Events printed by [`crate::terminal::print`] carry their text in this field and
/// are written without a level marker.
pub const RAW_FIELD: &str = "raw_msg";
pub const PRINT_TARGET: &str = "ltmgen::print";

pub struct LtmgenFormatter;

impl<S, N> FormatEvent<S, N> for LtmgenFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage(None);
            event.record(&mut raw);
            if let Some(msg) = raw.0 {
                return writeln!(writer, "{msg}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::ERROR => ("[-]", |s| s.red().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            _ => ("[ ]", |s| s.dimmed()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

struct RawMessage(Option<String>);

impl tracing::field::Visit for RawMessage {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == RAW_FIELD {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &tracing::field::Field, _value: &dyn std::fmt::Debug) {}
}

/// Default level per quiet count: 0 → info, anything higher → warn.
/// `RUST_LOG` overrides it.
pub fn filter_for(quiet: u8) -> EnvFilter {
    let default = if quiet > 0 { "warn" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_logging(quiet: u8) {
    tracing_subscriber::registry()
        .with(filter_for(quiet))
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(LtmgenFormatter)
                .with_writer(std::io::stderr),
        )
        .init();
}
