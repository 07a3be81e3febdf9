//! # shopcart Demo Entry Point
//!
//! ```bash
//! cargo run -p shopcart-demo
//! SHOPCART_FORMAT=json cargo run -p shopcart-demo
//! RUST_LOG=shopcart_core=debug cargo run -p shopcart-demo
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shopcart_demo::run() {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("shopcart-demo: {err}");
            ExitCode::FAILURE
        }
    }
}
