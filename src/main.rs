//! timekeeper main entrypoint.

use timekeeper::run;

fn main() {
    if let Err(e) = run() {
        timekeeper::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
