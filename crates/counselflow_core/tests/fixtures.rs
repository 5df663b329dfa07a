use counselflow_core::model::entity::EntityKind;
use counselflow_core::{load_demo_data, AppConfig, AppContext, Language, Theme};

#[test]
fn demo_data_has_every_collection() {
    let data = load_demo_data().unwrap();

    assert_eq!(data.contracts.len(), 5);
    assert_eq!(data.matters.len(), 4);
    assert_eq!(data.entities.len(), 4);
    assert_eq!(data.tasks.len(), 5);
    assert_eq!(data.risks.len(), 5);
    assert_eq!(data.disputes.len(), 4);
    assert_eq!(data.policies.len(), 6);
    assert_eq!(data.vendors.len(), 4);
    assert_eq!(data.compliance.len(), 5);
    assert_eq!(data.record_count(), 42);
}

#[test]
fn entities_keep_hierarchy_and_jurisdiction_order() {
    let data = load_demo_data().unwrap();

    let root = &data.entities[0];
    assert_eq!(root.kind, EntityKind::Corporation);
    assert_eq!(root.parent_entity, None);
    assert_eq!(root.primary_jurisdiction(), Some("Delaware"));

    let children = data
        .entities
        .iter()
        .filter(|entity| entity.parent_entity.as_deref() == Some("ENT-001"))
        .count();
    assert_eq!(children, 3);
}

#[test]
fn optional_fields_default_when_absent() {
    let data = load_demo_data().unwrap();

    let open_matter = data
        .matters
        .iter()
        .find(|matter| matter.id == "MAT-2024-021")
        .unwrap();
    assert_eq!(open_matter.target_close_date, None);

    let unfinished = data
        .compliance
        .iter()
        .find(|item| item.id == "COMP-2024-002")
        .unwrap();
    assert_eq!(unfinished.completion_date, None);
}

#[test]
fn context_starts_from_config_and_toggles_state() {
    let config = AppConfig::from_toml_str(
        "theme = \"dark\"
language = \"ar\"
sidebar_collapsed = true",
    )
    .unwrap();
    let mut context = AppContext::bootstrap(config).unwrap();

    assert_eq!(context.theme(), Theme::Dark);
    assert!(context.language().is_rtl());
    assert!(context.sidebar_collapsed());
    assert_eq!(context.data().record_count(), 42);

    context.toggle_theme();
    context.toggle_sidebar();
    context.set_language(Language::Sw);

    assert_eq!(context.theme(), Theme::Light);
    assert!(!context.sidebar_collapsed());
    assert_eq!(context.language(), Language::Sw);
    assert_eq!(context.config().theme, Theme::Dark);
}
