//! shiftscan main entrypoint.

use shiftscan::run;
use shiftscan::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
