pub mod commands;
mod render;
mod setup;

pub use commands::run;

use pethotel::error::HotelError;

/// Prints `error` to stderr and ends the process with status 1.
pub fn exit_with(error: &HotelError) -> ! {
    eprint!("{}", render::render_error(error));
    std::process::exit(1)
}
