//! rOvertime main entrypoint.

use rovertime::run;
use rovertime::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
