use super::*;
use crate::component::{CarouselProps, ComponentKind, ImageProps, TextProps};

fn carousel_with(images: &[&str]) -> ComponentInstance {
    let mut instance = ComponentInstance::new(ComponentKind::Carousel);
    for (slot, url) in images.iter().enumerate() {
        instance = instance.apply(PropertyEdit::AddCarouselSlot).expect("add slot");
        instance = instance
            .apply(PropertyEdit::CarouselImage { slot, url: (*url).to_owned() })
            .expect("set slot");
    }
    instance
}

// =============================================================
// apply
// =============================================================

#[test]
fn text_value_edit_replaces_markup() {
    let instance = ComponentInstance::new(ComponentKind::Text);
    let next = instance
        .apply(PropertyEdit::TextValue("Hello".to_owned()))
        .expect("text accepts value");
    assert_eq!(next.id(), instance.id());
    assert_eq!(next.props(), &ComponentProps::Text(TextProps { value: "Hello".to_owned() }));
    // The source value is untouched.
    assert_eq!(instance.props(), &ComponentProps::Text(TextProps::default()));
}

#[test]
fn image_edits_touch_only_their_field() {
    let instance = ComponentInstance::new(ComponentKind::Image)
        .apply(PropertyEdit::ImageSrc("https://example.com/a.png".to_owned()))
        .and_then(|i| i.apply(PropertyEdit::ImageAlt("A".to_owned())))
        .and_then(|i| i.apply(PropertyEdit::Width(320.0)))
        .and_then(|i| i.apply(PropertyEdit::Height(200.5)))
        .and_then(|i| i.apply(PropertyEdit::ImagePosition(ImagePosition::End)))
        .expect("image edits apply");
    assert_eq!(
        instance.props(),
        &ComponentProps::Image(ImageProps {
            src: "https://example.com/a.png".to_owned(),
            alt: "A".to_owned(),
            width: 320.0,
            height: 200.5,
            position: ImagePosition::End,
        })
    );
}

#[test]
fn carousel_slots_are_added_empty_and_edited_independently() {
    let instance = carousel_with(&["a.png", "b.png"]);
    let instance = instance.apply(PropertyEdit::AddCarouselSlot).expect("add slot");
    let instance = instance
        .apply(PropertyEdit::CarouselImage { slot: 0, url: "z.png".to_owned() })
        .expect("edit slot 0");
    assert_eq!(
        instance.props(),
        &ComponentProps::Carousel(CarouselProps {
            images: vec!["z.png".to_owned(), "b.png".to_owned(), String::new()],
            width: 0.0,
            height: 0.0,
        })
    );
}

#[test]
fn carousel_slot_past_end_is_rejected() {
    let instance = carousel_with(&["a.png"]);
    let err = instance
        .apply(PropertyEdit::CarouselImage { slot: 1, url: "b.png".to_owned() })
        .expect_err("slot 1 does not exist");
    assert_eq!(err, ModelError::SlotOutOfRange { slot: 1, len: 1 });
}

#[test]
fn edits_for_other_kinds_are_not_applicable() {
    let text = ComponentInstance::new(ComponentKind::Text);
    let err = text.apply(PropertyEdit::Width(10.0)).expect_err("text has no width");
    assert_eq!(err, ModelError::PropertyNotApplicable { kind: ComponentKind::Text, property: "width" });

    let carousel = ComponentInstance::new(ComponentKind::Carousel);
    let err = carousel
        .apply(PropertyEdit::ImagePosition(ImagePosition::Start))
        .expect_err("carousel has no position");
    assert_eq!(err, ModelError::PropertyNotApplicable { kind: ComponentKind::Carousel, property: "position" });

    let image = ComponentInstance::new(ComponentKind::Image);
    let err = image.apply(PropertyEdit::AddCarouselSlot).expect_err("image has no slots");
    assert_eq!(err, ModelError::PropertyNotApplicable { kind: ComponentKind::Image, property: "images" });
}

#[test]
fn non_finite_dimensions_are_rejected() {
    let image = ComponentInstance::new(ComponentKind::Image);
    assert!(matches!(image.apply(PropertyEdit::Width(f64::NAN)), Err(ModelError::InvalidNumber(_))));
    assert!(matches!(image.apply(PropertyEdit::Height(f64::INFINITY)), Err(ModelError::InvalidNumber(_))));
}

#[test]
fn negative_dimensions_are_accepted() {
    let image = ComponentInstance::new(ComponentKind::Image)
        .apply(PropertyEdit::Width(-5.0))
        .expect("no range validation");
    let ComponentProps::Image(props) = image.props() else {
        panic!("image props");
    };
    assert_eq!(props.width, -5.0);
}

// =============================================================
// parse_dimension
// =============================================================

#[test]
fn parse_dimension_accepts_numbers() {
    assert_eq!(parse_dimension("320"), Ok(320.0));
    assert_eq!(parse_dimension(" 12.5 "), Ok(12.5));
    assert_eq!(parse_dimension("-4"), Ok(-4.0));
}

#[test]
fn parse_dimension_treats_empty_as_zero() {
    assert_eq!(parse_dimension(""), Ok(0.0));
    assert_eq!(parse_dimension("   "), Ok(0.0));
}

#[test]
fn parse_dimension_rejects_garbage() {
    assert_eq!(parse_dimension("wide"), Err(ModelError::InvalidNumber("wide".to_owned())));
    assert!(parse_dimension("NaN").is_err());
    assert!(parse_dimension("inf").is_err());
    assert!(parse_dimension("12px").is_err());
}
