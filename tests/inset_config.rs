//! Integration tests for inset configuration, themes and serialized output

use memeplot::{
    list_templates, resolve_background, resolve_inset, ConfigError, InsetConfig, InsetTheme,
    LayoutOverride, LayoutRecord, LegendPosition, Rgba, TemplateError,
};
use pretty_assertions::assert_eq;

#[test]
fn test_template_listing_snapshot() {
    let position = list_templates("position").unwrap().join(" ");
    insta::assert_snapshot!(position, @"default tl tr br bl tlq trq brq blq center");

    let background = list_templates("background").unwrap().join(" ");
    insta::assert_snapshot!(background, @"default op sq opsq blank");
}

#[test]
fn test_background_toml_snapshot() {
    let style = resolve_background("default").unwrap();
    insta::assert_snapshot!(toml::to_string(&style).unwrap(), @r###"
    fill = "#ffffff80"
    corner_radius = 0.025
    "###);

    let blank = resolve_background("blank").unwrap();
    insta::assert_snapshot!(toml::to_string(&blank).unwrap(), @"corner_radius = 0.0");
}

#[test]
fn test_layout_toml_snapshot() {
    let layout = LayoutRecord::new(0.95, 0.6, 0.5, 0.325);
    insta::assert_snapshot!(toml::to_string(&layout).unwrap(), @r###"
    w = 0.95
    h = 0.6
    x = 0.5
    y = 0.325
    "###);
}

#[test]
fn test_config_file_round_trip() {
    let config = InsetConfig::from_str(
        r#"
[inset]
position = "brq"
margin = [0.05, 0.1]
background = "op"
"#,
    )
    .expect("Should parse");

    let inset = resolve_inset(&config).unwrap();
    // qsize = 0.5 - 2m, centre = 1 - (qsize/2 + m)
    assert!((inset.layout.w - 0.4).abs() < 1e-12);
    assert!((inset.layout.h - 0.3).abs() < 1e-12);
    assert!((inset.layout.x - 0.75).abs() < 1e-12);
    assert!((inset.layout.y - 0.25).abs() < 1e-12);
    assert_eq!(inset.background.fill, Some(Rgba::WHITE));
}

#[test]
fn test_config_override_moves_inset_off_canvas() {
    let config = InsetConfig::new()
        .with_position("tr")
        .with_override(LayoutOverride::new().with_center(1.0, 1.0));
    let inset = resolve_inset(&config).unwrap();
    assert_eq!((inset.layout.x, inset.layout.y), (1.0, 1.0));
    assert!(!inset.layout.is_within_canvas());
}

#[test]
fn test_config_shape_error() {
    let config = InsetConfig::from_str("[inset]\nsize = [0.1, 0.2, 0.3]\n").expect("Should parse");
    let err = resolve_inset(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Template(TemplateError::InvalidArgumentShape { param: "size", len: 3 })
    ));
    assert_eq!(err.to_string(), "size must have 1 or 2 elements, got 3");
}

#[test]
fn test_missing_config_file() {
    let result = InsetConfig::from_file(std::path::Path::new("does/not/exist.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_theme_overrides() {
    let theme = InsetTheme::from_str(
        r#"
[theme]
font_family = "Impact"
legend_position = "right"
"#,
    )
    .expect("Should parse");

    assert_eq!(theme.font_family.as_deref(), Some("Impact"));
    assert_eq!(theme.legend_position, LegendPosition::Right);
    assert_eq!(theme.base_size, InsetTheme::default().base_size);
    assert!(theme.is_transparent());
}

#[test]
fn test_theme_accepts_css_colors() {
    let cases = [
        ("steelblue", Rgba::opaque(70, 130, 180)),
        ("rgba(255,255,255,0.5)", Rgba::WHITE.with_alpha(0.5)),
        ("red", Rgba::opaque(255, 0, 0)),
    ];
    for (input, expected) in cases {
        let toml_str = format!("[theme]\ntext_color = \"{}\"\n", input);
        let theme = InsetTheme::from_str(&toml_str)
            .unwrap_or_else(|e| panic!("{} should parse: {}", input, e));
        assert_eq!(theme.text_color, expected, "{}", input);
    }
}
