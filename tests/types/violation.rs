use guard_rail::{IndexVec, Location, Side, Violation, ViolationKind};

#[test]
fn element_violation_reports_location_and_error() {
    let violation = Violation::Element { location: Location::Index(4), error: "bad" };

    assert_eq!(violation.kind(), ViolationKind::Element);
    assert!(violation.is_element());
    assert_eq!(violation.location(), Some(&Location::Index(4)));
    assert_eq!(violation.error(), Some(&"bad"));
    assert_eq!(violation.into_error(), Some("bad"));
}

#[test]
fn engine_violations_carry_no_caller_error() {
    let imbalance: Violation<&str> = Violation::Imbalance { position: 2, present: Side::X };
    let cancelled: Violation<&str> = Violation::Cancelled { position: 5 };

    assert!(imbalance.is_imbalance());
    assert!(cancelled.is_cancelled());
    assert_eq!(imbalance.error(), None);
    assert_eq!(cancelled.location(), None);
    assert_eq!(cancelled.kind(), ViolationKind::Cancelled);
}

#[test]
fn map_err_preserves_shape() {
    let aggregate: Violation<&str> = Violation::Aggregate("short");
    assert_eq!(aggregate.map_err(str::len), Violation::Aggregate(5));

    let imbalance: Violation<&str> = Violation::Imbalance { position: 1, present: Side::Y };
    assert_eq!(imbalance.map_err(str::len), Violation::Imbalance { position: 1, present: Side::Y });
}

#[test]
fn display_formats_every_kind() {
    let indices: IndexVec = IndexVec::from_slice(&[1, 2]);
    let array = Violation::Element { location: Location::Array { offset: 5, indices }, error: "neg" };
    assert_eq!(array.to_string(), "element violation at [1, 2] (offset 5): neg");

    let step = Violation::Element { location: Location::Step { step: 3, side: Some(Side::Y) }, error: "e" };
    assert_eq!(step.to_string(), "element violation at step 3 (y): e");

    let imbalance: Violation<&str> = Violation::Imbalance { position: 3, present: Side::Y };
    assert_eq!(
        imbalance.to_string(),
        "sequence imbalance at position 3: only y has an element, x is exhausted"
    );

    assert_eq!(Violation::Aggregate("too few").to_string(), "aggregate violation: too few");
    let cancelled: Violation<&str> = Violation::Cancelled { position: 0 };
    assert_eq!(cancelled.to_string(), "traversal cancelled before step 0");
}

#[test]
fn location_position_is_flat() {
    assert_eq!(Location::Index(3).position(), 3);
    assert_eq!(Location::Array { offset: 7, indices: IndexVec::new() }.position(), 7);
    assert_eq!(Location::Step { step: 2, side: None }.position(), 2);
    assert_eq!(Side::X.other(), Side::Y);
}

#[cfg(feature = "std")]
#[test]
fn violation_exposes_caller_error_as_source() {
    use guard_rail::GuardResult;
    use std::error::Error;

    let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt");
    let violation: GuardResult<(), std::io::Error> = Err(Violation::Aggregate(io));
    let violation = violation.unwrap_err();

    assert!(violation.source().is_some());
    assert!(violation.to_string().contains("corrupt"));
}
