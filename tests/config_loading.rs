use eframe_grid_paint::{ConfigError, GridConfig};
use egui::Color32;

#[test]
fn empty_object_gives_defaults() {
    let config = GridConfig::from_json("{}").unwrap();
    assert_eq!(config, GridConfig::default());
    assert_eq!(config.cell_count, 2405);
}

#[test]
fn fields_override_defaults() {
    let config =
        GridConfig::from_json(r##"{ "cell_count": 100, "default_color": "#00ff00" }"##).unwrap();
    assert_eq!(config.cell_count, 100);
    assert_eq!(config.cell_size, 12.0);
    assert_eq!(config.default_color().unwrap(), Color32::from_rgb(0, 255, 0));
}

#[test]
fn custom_swatches_build_the_palette() {
    let config = GridConfig::from_json(
        r##"{ "swatches": ["#ff0000", "0000ff"], "picker_default": "#000000" }"##,
    )
    .unwrap();
    let palette = config.palette().unwrap();
    assert_eq!(palette.swatches(), &[Color32::RED, Color32::from_rgb(0, 0, 255)]);
    assert_eq!(palette.picker(), Color32::BLACK);
}

#[test]
fn bad_swatch_is_reported_by_field() {
    let err = GridConfig::from_json(r##"{ "swatches": ["#12"] }"##).unwrap_err();
    assert!(matches!(err, ConfigError::Color { field: "swatches", .. }));
    assert!(err.to_string().contains("swatches"));
}

#[test]
fn non_positive_cell_size_is_rejected() {
    let err = GridConfig::from_json(r#"{ "cell_size": 0.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidCellSize(size) if size == 0.0));
}

#[test]
fn malformed_json_is_reported() {
    let err = GridConfig::from_json("{ cell_count: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GridConfig::load("/definitely/not/here/grid.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
