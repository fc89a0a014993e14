use super::*;

#[test]
fn error_codes_are_distinct() {
    let errors = [
        ModelError::UnknownKind("video".to_owned()),
        ModelError::IndexOutOfRange { index: 3, len: 1 },
        ModelError::InstanceNotFound(uuid::Uuid::nil()),
        ModelError::KindMismatch { expected: ComponentKind::Text, found: ComponentKind::Image },
        ModelError::NothingSelected,
        ModelError::PropertyNotApplicable { kind: ComponentKind::Text, property: "src" },
        ModelError::SlotOutOfRange { slot: 2, len: 0 },
        ModelError::InvalidNumber("abc".to_owned()),
    ];
    for (i, a) in errors.iter().enumerate() {
        for (j, b) in errors.iter().enumerate() {
            if i != j {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}

#[test]
fn display_includes_offending_values() {
    let err = ModelError::IndexOutOfRange { index: 4, len: 2 };
    assert_eq!(err.to_string(), "index 4 out of range for 2 instances");

    let err = ModelError::PropertyNotApplicable { kind: ComponentKind::Carousel, property: "alt" };
    assert_eq!(err.to_string(), "carousel component has no `alt` property");

    let err = ModelError::UnknownKind("video".to_owned());
    assert_eq!(err.to_string(), "unknown component kind: \"video\"");

    let err = ModelError::InstanceNotFound(uuid::Uuid::nil());
    assert_eq!(err.to_string(), "no instance with id 00000000-0000-0000-0000-000000000000");
}
