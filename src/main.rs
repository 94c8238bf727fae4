//! calendario main entrypoint.

use calendario::run;

fn main() {
    if let Err(e) = run() {
        calendario::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
