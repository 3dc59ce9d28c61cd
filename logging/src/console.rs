use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

use crate::layout::Layout;

/// Console formatter for the library's own diagnostics.
///
/// Prefixes each event with a colored level label; sub-info levels also show
/// the emitting target so noisy internals stay attributable.
pub struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let label: ColoredString = match *meta.level() {
            Level::TRACE => "trace".dimmed(),
            Level::DEBUG => "debug".cyan(),
            Level::INFO => " info".green().bold(),
            Level::WARN => " warn".yellow().bold(),
            Level::ERROR => "error".red().bold(),
        };

        write!(writer, "{} ", label)?;

        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

impl Layout for ConsoleFormatter {
    // Error fields are rendered inline with the rest of the event.
    fn ignores_throwable(&self) -> bool {
        false
    }
}

/// Installs the console subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `info`. Safe to call
/// more than once; only the first call installs a subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ConsoleFormatter)
        .try_init();
}
