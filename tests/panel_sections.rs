use cadenza_settings::panel::{self, PropertyKind, Target};
use cadenza_settings::{Colour, Settings};

#[test]
fn stock_scheme_builds_three_sections() {
    let settings = Settings::in_memory();
    let sections = panel::colour_sections(&settings);

    let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Interface", "Editor", "Console"]);

    let total: usize = sections.iter().map(|s| s.items.len()).sum();
    assert_eq!(total, settings.colour_count());
}

#[test]
fn every_colour_row_is_a_colour_editor() {
    let settings = Settings::in_memory();
    for section in panel::colour_sections(&settings) {
        for item in &section.items {
            assert!(
                matches!(item.kind, PropertyKind::Colour(_)),
                "{} is not a colour row",
                item.label
            );
            assert!(matches!(item.target, Target::ColourEntry(_)));
        }
    }
}

#[test]
fn edits_round_trip_through_apply() {
    let mut settings = Settings::in_memory();

    // Flip a toggle row.
    let mut rows = panel::misc_properties(&settings);
    let row = rows
        .iter_mut()
        .find(|r| r.target == Target::StoreKey("CompileOnSave".to_string()))
        .expect("row");
    row.kind = PropertyKind::Toggle(false);
    panel::apply(&mut settings, row);
    assert_eq!(settings.int_value("CompileOnSave"), 0);

    // Rebuilding the rows reflects the edit.
    let rebuilt = panel::misc_properties(&settings);
    let row = rebuilt
        .iter()
        .find(|r| r.target == Target::StoreKey("CompileOnSave".to_string()))
        .expect("row");
    assert_eq!(row.kind, PropertyKind::Toggle(false));
}

#[test]
fn colour_edit_refreshes_panel_and_store() {
    let mut settings = Settings::in_memory();
    let purple = Colour::rgb(0x80, 0x00, 0x80);

    let sections = panel::colour_sections(&settings);
    let caret = sections
        .iter()
        .flat_map(|s| s.items.iter())
        .find(|item| item.label == "Editor - Caret")
        .expect("caret row")
        .clone();

    let edited = panel::PropertyItem {
        kind: PropertyKind::Colour(purple),
        ..caret
    };
    panel::apply(&mut settings, &edited);

    assert_eq!(settings.colour("Editor - Caret", Colour::BLACK), purple);
    assert_eq!(settings.value("Colours_Editor - Caret"), purple.to_hex());
}
