//! A union has no single active field to classify.

use data_classifier::Classified;

#[derive(Classified)]
union Bits {
    raw: u64,
    float: f64,
}

fn main() {}
