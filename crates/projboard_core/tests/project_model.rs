use projboard_core::{Project, ProjectState, ProjectStatus};

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let mut state = ProjectState::new();
    let id = state.add_project("Launch", "ship the thing", 2);
    state.move_project(id, ProjectStatus::Finished);

    let json = serde_json::to_value(state.get(id).unwrap()).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Launch");
    assert_eq!(json["description"], "ship the thing");
    assert_eq!(json["people"], 2);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(&decoded, state.get(id).unwrap());
}

#[test]
fn status_display_matches_parse() {
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        assert_eq!(status.to_string().parse::<ProjectStatus>(), Ok(status));
    }
}
