//! A tool to score page-performance metrics.
//!
//! # Quick Start
//!
//! Score a cumulative layout shift measurement with the default calibration:
//!
//! ```bash
//! perfscore score 0.05
//! ```
//!
//! Override the calibration for a single run:
//!
//! ```bash
//! perfscore score 0.25 --podr 0.1 --median 0.25
//! ```
//!
//! List the registered audits:
//!
//! ```bash
//! perfscore audits
//! ```
//!
//! # Configuration
//!
//! `perfscore` looks for `perfscore.toml` in the current directory. Generate one with:
//!
//! ```bash
//! perfscore init
//! ```
//!
//! ```toml
//! locale = "en-US"
//! form_factor = "mobile"
//!
//! [audits.cumulative-layout-shift]
//! podr = 0.1
//! median = 0.5
//! ```

use perfscore::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that runs against the real process.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
