//! `SystemTime` does not implement `Classified`, so it cannot be walked.

use data_classifier::Classified;
use std::time::SystemTime;

#[derive(Classified)]
struct Record {
    #[classified]
    timestamp: SystemTime,
}

fn main() {}
