//! extrapay main entrypoint.

use extrapay::run;
use extrapay::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
