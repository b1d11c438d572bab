//! End-to-end pipeline tests: source string in, image out

use treegraph::{
    render, render_png, render_with_config, PipelineError, RenderConfig, TreeOptions,
};

#[test]
fn test_well_formed_input_renders() {
    let svg = render("[S [NP John] [VP [V saw] [NP Mary]]]").unwrap();
    assert!(svg.contains("<svg"));
    for label in ["S", "NP", "VP", "V", "John", "saw", "Mary"] {
        assert!(svg.contains(label), "missing {}", label);
    }
}

#[test]
fn test_canvas_dimensions_are_positive() {
    let svg = render("[S [NP the cat] [VP sat]]").unwrap();
    let width_attr = svg.split(r#"width=""#).nth(1).and_then(|s| s.split('"').next());
    let height_attr = svg.split(r#"height=""#).nth(1).and_then(|s| s.split('"').next());
    let width: f64 = width_attr.unwrap().parse().unwrap();
    let height: f64 = height_attr.unwrap().parse().unwrap();
    assert!(width > 0.0);
    assert!(height > 0.0);
}

#[test]
fn test_missing_close_bracket_fails_at_end_of_input() {
    let input = "[S [NP the] [VP sat]";
    match render(input) {
        Err(PipelineError::Parse(err)) => assert_eq!(err.offset(), input.len()),
        other => panic!("expected a parse error, got {:?}", other.map(|_| "image")),
    }
}

#[test]
fn test_bracketless_input_fails_at_offset_zero() {
    match render("S NP the VP sat") {
        Err(PipelineError::Parse(err)) => assert_eq!(err.offset(), 0),
        other => panic!("expected a parse error, got {:?}", other.map(|_| "image")),
    }
}

#[test]
fn test_empty_label_fails_at_bracket_pair() {
    match render("[S [] [VP sat]]") {
        Err(PipelineError::Parse(err)) => assert_eq!(err.offset(), 3),
        other => panic!("expected a parse error, got {:?}", other.map(|_| "image")),
    }
}

#[test]
fn test_two_roots_rejected() {
    assert!(matches!(
        render("[NP [N dogs]] [NP [N cats]]"),
        Err(PipelineError::Parse(_))
    ));
}

#[test]
fn test_autosub_numbers_only_colliding_labels() {
    let config = RenderConfig::new().with_options(TreeOptions::default().with_autosub(true));
    let svg = render_with_config("[S [NP John] [VP [V saw] [NP Mary]]]", &config).unwrap();
    // The two NPs pick up subscripts 1 and 2; the lone VP stays plain.
    assert!(svg.contains(">NP<tspan"));
    assert!(svg.contains(">1</tspan>"));
    assert!(svg.contains(">2</tspan>"));
    assert!(svg.contains(">VP</text>"));
}

#[test]
fn test_triangles_honored_by_default() {
    let svg = render("[S [NP^ the old man] [VP left]]").unwrap();
    assert!(svg.contains("tg-triangle"));
    assert!(svg.contains("the old man"));
}

#[test]
fn test_triangles_disabled_forces_expansion() {
    let config = RenderConfig::new().with_options(TreeOptions::default().with_triangles(false));
    let svg = render_with_config("[S [NP^ the old man] [VP left]]", &config).unwrap();
    assert!(!svg.contains("tg-triangle"));
    assert!(svg.contains(">old</text>"));
}

#[test]
fn test_png_output_has_signature() {
    let png = render_png("[S [NP the cat] [VP sat]]").unwrap();
    assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
}

#[test]
fn test_missing_font_surfaces_as_render_error() {
    let config = RenderConfig::new()
        .with_options(TreeOptions::default().with_font_path("/no/such/font.ttf"));
    assert!(matches!(
        render_with_config("[S x]", &config),
        Err(PipelineError::Render(_))
    ));
}

#[test]
fn test_monochrome_and_colored_differ() {
    let input = "[S [NP dogs] [VP bark]]";
    let colored = render(input).unwrap();
    let config = RenderConfig::new().with_options(TreeOptions::default().with_color(false));
    let mono = render_with_config(input, &config).unwrap();
    assert_ne!(colored, mono);
}
