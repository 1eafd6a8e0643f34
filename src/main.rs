//! offwork main entrypoint.

use offwork::run;
use offwork::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
