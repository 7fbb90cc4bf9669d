use marquee::{Brand, PreviewMessage, ViewportMode, registry};

#[test]
fn test_editing_session_workflow() {
    // Editor starts from an image-free copy of the brand default
    let mut config = registry::default_config_for_editing(Brand::Netflix);
    assert!(config.hero.image.is_empty());

    config.hero.title = "Our Story".into();
    config.hero.image = "https://cdn.example.com/preview-images/abc.jpg".into();
    let id = config.add_show(marquee::Show::placeholder("Anniversary Special"));

    // The baseline is untouched by the session
    let baseline = registry::default_config(Brand::Netflix);
    assert_ne!(baseline.hero.title, "Our Story");
    assert!(baseline.find_show(id).is_none());

    // Every change re-sends the whole document to the preview frame
    let message = PreviewMessage::config_update(config.clone(), ViewportMode::Mobile);
    let json = message.to_json().unwrap();
    match PreviewMessage::from_json(&json).unwrap() {
        PreviewMessage::ConfigUpdate { document, .. } => assert_eq!(*document, config),
        PreviewMessage::PreviewReady => panic!("Expected ConfigUpdate"),
    }
}

#[test]
fn test_registry_lookup_by_string() {
    assert!(registry::is_valid("netflix"));
    assert!(!registry::is_valid("otherbrand"));

    let brand: Brand = "netflix".parse().unwrap();
    let show = registry::show_by_id(brand, 2).unwrap();
    assert_eq!(show.title, registry::default_config(brand).shows[1].title);
}

#[test]
fn test_default_rows_resolve_against_shows() {
    let config = registry::default_config(Brand::Netflix);
    for row in config.resolve_rows() {
        assert!(!row.shows.is_empty(), "row {} resolved to nothing", row.title);
    }
}

#[test]
fn test_edits_to_a_copy_never_reach_later_copies() {
    let mut first = registry::default_config(Brand::Netflix);
    first.hero.image.clear();
    first.shows[0].title = "Changed".into();
    first.content_rows.clear();

    let second = registry::default_config(Brand::Netflix);
    assert_eq!(second.hero.image, "/images/hero.jpg");
    assert_eq!(second.shows[0].title, "First Date");
    assert_eq!(second.content_rows.len(), 3);
    assert_eq!(
        registry::show_by_id(Brand::Netflix, 1).unwrap().title,
        "First Date"
    );
}
