//! Deriving on enums without variants.
//!
//! The generated code must compile cleanly in crates that deny warnings.

#![deny(warnings)]

use data_classifier::{combine_all, Classification, Classified};

#[derive(Classified)]
enum Never {}

#[derive(Classified)]
#[classified(PII)]
enum NeverTagged {}

#[derive(Classified)]
struct Holder {
    #[classified]
    never: Option<Never>,
    #[classified]
    tagged: Vec<NeverTagged>,
}

#[test]
fn test_uninhabited_enums_contribute_nothing() {
    let holder = Holder {
        never: None,
        tagged: Vec::new(),
    };
    assert_eq!(holder.classification(), Classification::NO_VALUE);
    assert!(holder.never.is_none());
    assert!(holder.tagged.is_empty());
    assert_eq!(combine_all(Vec::<Never>::new()), Classification::NO_VALUE);
}
