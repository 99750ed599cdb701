//! Scalars carry no classification; classify them by declaration instead.

use data_classifier::Classified;

#[derive(Classified)]
struct Counter {
    #[classified]
    count: u64,
}

fn main() {}
