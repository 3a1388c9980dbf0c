//! Screen modules besides the watchface itself.
//!
//! - **Debug Page** ([`debug`]): Profiling metrics, tick counters and the
//!   event log (toggled with the `Y` key)

mod debug;

pub use debug::draw_debug_page;
