use super::*;

// =============================================================
// ComponentKind
// =============================================================

#[test]
fn kind_parses_palette_tags() {
    assert_eq!("text".parse::<ComponentKind>(), Ok(ComponentKind::Text));
    assert_eq!("image".parse::<ComponentKind>(), Ok(ComponentKind::Image));
    assert_eq!(" carousel ".parse::<ComponentKind>(), Ok(ComponentKind::Carousel));
}

#[test]
fn kind_rejects_unknown_tags() {
    let err = "video".parse::<ComponentKind>().expect_err("video is not a kind");
    assert_eq!(err, ModelError::UnknownKind("video".to_owned()));
    assert!("Text".parse::<ComponentKind>().is_err());
    assert!("".parse::<ComponentKind>().is_err());
}

#[test]
fn kind_tags_match_display_and_serde() {
    for kind in ComponentKind::ALL {
        assert_eq!(kind.to_string(), kind.as_str());
        assert_eq!(serde_json::to_value(kind).expect("serialize"), serde_json::json!(kind.as_str()));
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn text_defaults_to_empty_value() {
    let props = ComponentProps::defaults(ComponentKind::Text);
    assert_eq!(props, ComponentProps::Text(TextProps { value: String::new() }));
}

#[test]
fn image_defaults_are_render_ready() {
    let ComponentProps::Image(image) = ComponentProps::defaults(ComponentKind::Image) else {
        panic!("image defaults should be image props");
    };
    assert!(image.src.is_empty());
    assert!(image.alt.is_empty());
    assert_eq!(image.width, 0.0);
    assert_eq!(image.height, 0.0);
    assert_eq!(image.position, ImagePosition::Center);
}

#[test]
fn carousel_defaults_have_an_empty_image_list() {
    let ComponentProps::Carousel(carousel) = ComponentProps::defaults(ComponentKind::Carousel) else {
        panic!("carousel defaults should be carousel props");
    };
    assert!(carousel.images.is_empty());
    assert_eq!(carousel.width, 0.0);
    assert_eq!(carousel.height, 0.0);
}

#[test]
fn defaults_report_their_kind() {
    for kind in ComponentKind::ALL {
        assert_eq!(ComponentProps::defaults(kind).kind(), kind);
    }
}

// =============================================================
// ImagePosition
// =============================================================

#[test]
fn image_position_maps_to_flex_alignment() {
    assert_eq!(ImagePosition::Start.justify_content(), "flex-start");
    assert_eq!(ImagePosition::Center.justify_content(), "center");
    assert_eq!(ImagePosition::End.justify_content(), "flex-end");
}

// =============================================================
// ComponentInstance
// =============================================================

#[test]
fn new_instances_get_distinct_ids() {
    let a = ComponentInstance::new(ComponentKind::Text);
    let b = ComponentInstance::new(ComponentKind::Text);
    assert_ne!(a.id(), b.id());
    assert_eq!(a.kind(), ComponentKind::Text);
}

#[test]
fn with_props_keeps_id_for_same_kind() {
    let original = ComponentInstance::new(ComponentKind::Text);
    let next = original
        .with_props(ComponentProps::Text(TextProps { value: "<p>hi</p>".to_owned() }))
        .expect("same kind");
    assert_eq!(next.id(), original.id());
    assert_eq!(next.props(), &ComponentProps::Text(TextProps { value: "<p>hi</p>".to_owned() }));
}

#[test]
fn with_props_rejects_kind_change() {
    let original = ComponentInstance::new(ComponentKind::Image);
    let err = original
        .with_props(ComponentProps::defaults(ComponentKind::Carousel))
        .expect_err("kind is fixed");
    assert_eq!(err, ModelError::KindMismatch { expected: ComponentKind::Image, found: ComponentKind::Carousel });
}

#[test]
fn instance_serializes_with_type_and_props_keys() {
    let instance = ComponentInstance::new(ComponentKind::Image);
    let json = serde_json::to_value(&instance).expect("serialize");
    assert_eq!(json["id"], serde_json::json!(instance.id().to_string()));
    assert_eq!(json["type"], serde_json::json!("image"));
    assert_eq!(json["props"]["position"], serde_json::json!("center"));
    assert_eq!(json["props"]["src"], serde_json::json!(""));
}
