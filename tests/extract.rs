use wellscore::panel::{find_marker, BiomarkerPanel, PanelValue};

fn text_panel(entries: &[(&str, &str)]) -> BiomarkerPanel {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), PanelValue::from(*v)))
        .collect()
}

#[test]
fn resolves_casing_spacing_and_hyphens() {
    let panel = text_panel(&[("Fasting Glucose", "82 mg/dL")]);
    let m = find_marker(&panel, &["fasting_glucose", "glucose"]).unwrap();
    assert_eq!(m.value, 82.0);
    assert_eq!(m.unit, "mg/dL");

    let panel = text_panel(&[("hs-CRP", "0.4 mg/L")]);
    let m = find_marker(&panel, &["hscrp", "hs_crp", "crp"]).unwrap();
    assert_eq!(m.value, 0.4);
}

#[test]
fn earlier_alias_wins_over_panel_order() {
    // "crp" sorts before "hsCRP" in the panel, but the alias list is
    // scanned alias-first.
    let panel = text_panel(&[("crp", "2.0"), ("hsCRP", "1.0")]);
    let m = find_marker(&panel, &["hscrp", "hs_crp", "crp"]).unwrap();
    assert_eq!(m.value, 1.0);
}

#[test]
fn unparseable_match_keeps_scanning() {
    let panel = text_panel(&[("hscrp", "pending"), ("crp", "2.0")]);
    let m = find_marker(&panel, &["hscrp", "hs_crp", "crp"]).unwrap();
    assert_eq!(m.value, 2.0);
}

#[test]
fn null_reading_is_treated_as_absent() {
    let mut panel = text_panel(&[("crp", "2.0")]);
    panel.insert("hscrp".to_string(), PanelValue::Null);
    let m = find_marker(&panel, &["hscrp", "hs_crp", "crp"]).unwrap();
    assert_eq!(m.value, 2.0);

    let mut empty = BiomarkerPanel::new();
    empty.insert("ferritin".to_string(), PanelValue::Null);
    assert!(find_marker(&empty, &["ferritin"]).is_none());
}

#[test]
fn missing_marker_is_none() {
    let panel = text_panel(&[("ferritin", "70")]);
    assert!(find_marker(&panel, &["hscrp", "crp"]).is_none());
}

#[test]
fn number_reading_has_empty_unit() {
    let mut panel = BiomarkerPanel::new();
    panel.insert("ferritin".to_string(), PanelValue::Number(70.0));
    let m = find_marker(&panel, &["ferritin"]).unwrap();
    assert_eq!(m.value, 70.0);
    assert_eq!(m.unit, "");
}

#[test]
fn colliding_keys_resolve_deterministically() {
    // Both keys normalize to "iron"; the panel's ordered keys make the
    // winner stable ("Iron" sorts before "iron").
    let panel = text_panel(&[("iron", "85"), ("Iron", "90")]);
    let m = find_marker(&panel, &["iron"]).unwrap();
    assert_eq!(m.value, 90.0);
}
