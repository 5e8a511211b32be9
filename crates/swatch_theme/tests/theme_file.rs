use std::io::Write as _;

use pretty_assertions::assert_eq;
use swatch_theme::{
    load_theme_file, Color, ColorRole, FontFamily, ThemeBuilder, ThemeDefinition, ThemeError,
    ThemePreset,
};

#[test]
fn preset_export_loads_back_with_same_tokens() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let source = theme.to_toml_string().unwrap();
        let loaded = ThemeDefinition::from_toml_str(&source)
            .unwrap_or_else(|err| panic!("preset={preset:?}: {err}\n{source}"));

        assert_eq!(loaded.name(), theme.name());
        assert_eq!(loaded.color_scheme(), theme.color_scheme());
        assert_eq!(loaded.colors(), theme.colors());
        assert_eq!(loaded.typography(), theme.typography());
        assert_eq!(loaded.spacing(), theme.spacing());
        assert_eq!(loaded.elevation(), theme.elevation());
        assert_eq!(loaded.radii(), theme.radii());
        assert_eq!(loaded.animations(), theme.animations());
        // Loaded themes are custom
        assert_eq!(loaded.preset(), None);
    }
}

#[test]
fn custom_theme_round_trips_equal() {
    let theme = ThemeBuilder::from_theme(&ThemePreset::Forest.theme())
        .name("Moss")
        .color(ColorRole::Primary, Color::from_hex(0x1F5A2A))
        .typography(
            ThemePreset::Forest
                .theme()
                .typography()
                .with_family(FontFamily::Custom("Inter".to_string())),
        )
        .build()
        .unwrap();

    let loaded = ThemeDefinition::from_toml_str(&theme.to_toml_string().unwrap()).unwrap();
    assert_eq!(loaded, theme);
}

#[test]
fn full_color_table_required_without_extends() {
    let err = ThemeDefinition::from_toml_str(
        r##"
        name = "Sparse"
        scheme = "dark"

        [colors]
        primary = "#8ab4f8"
        "##,
    )
    .unwrap_err();
    match err {
        ThemeError::MissingColorRoles { name, roles } => {
            assert_eq!(name, "Sparse");
            assert_eq!(roles.len(), ColorRole::ALL.len() - 1);
            assert!(!roles.contains(&ColorRole::Primary));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unreadable_theme_is_rejected_but_loads_unvalidated() {
    let source = r##"
        name = "Washed Out"
        extends = "light"

        [colors]
        on_primary = "#2b6be0"
    "##;
    assert!(matches!(
        ThemeDefinition::from_toml_str(source),
        Err(ThemeError::Invalid { .. })
    ));

    let theme = ThemeDefinition::from_toml_str_unvalidated(source).unwrap();
    assert!(theme.validate().has_errors());
}

#[test]
fn load_from_disk() {
    let path = std::env::temp_dir().join(format!("swatch-theme-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"name = \"Disk\"\nextends = \"ocean\"\n").unwrap();
    drop(file);

    let theme = load_theme_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(theme.name(), "Disk");
    assert_eq!(theme.colors(), ThemePreset::Ocean.theme().colors());
}
