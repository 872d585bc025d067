//! Panic hook that gives the terminal back before reporting.
//!
//! A panic while the map is open would otherwise print into the alternate
//! screen and vanish when the process exits.

use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        exit_tui_mode();
        print_crash_report(info);
    }));
}

fn exit_tui_mode() {
    // Already panicking; nothing useful to do with these errors.
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stderr(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    );
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    eprintln!();
    eprintln!("townmap {VERSION} crashed on {}", std::env::consts::OS);
    eprintln!("  panic: {}", extract_panic_message(info));
    if let Some(location) = info.location() {
        eprintln!(
            "  at {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  run with RUST_BACKTRACE=1 for a stack trace");
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
