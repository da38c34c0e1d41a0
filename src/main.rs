//! acmehr main entrypoint.

use acmehr::run;
use acmehr::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
