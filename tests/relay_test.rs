use recruitment_tracker_client::models::response::CommandResponse;
use recruitment_tracker_client::relay::{
    assistant_reply, command_mutates, Role, Transcript, FALLBACK_RESPONSE,
};
use serde_json::json;

fn response(value: serde_json::Value) -> CommandResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn server_error_field_wins_over_everything_else() {
    let reply = assistant_reply(&response(json!({ "error": "bad" })));
    assert_eq!(reply, "Error: bad");

    let reply = assistant_reply(&response(json!({ "error": "bad", "response": "ok" })));
    assert_eq!(reply, "Error: bad");
}

#[test]
fn response_text_is_relayed_verbatim() {
    let reply = assistant_reply(&response(json!({ "response": "ok" })));
    assert_eq!(reply, "ok");
}

#[test]
fn empty_payload_falls_back_to_the_fixed_string() {
    let reply = assistant_reply(&response(json!({})));
    assert_eq!(reply, FALLBACK_RESPONSE);
}

#[test]
fn mutation_heuristic_matches_add_and_update_case_insensitively() {
    assert!(command_mutates("Please ADD a job in Berlin"));
    assert!(command_mutates("update the CV status for Jane"));
    assert!(!command_mutates("list all open jobs"));
    // Substring match by design; the heuristic is knowingly imprecise.
    assert!(command_mutates("show me the latest additions"));
}

#[test]
fn transcript_keeps_turns_in_order() {
    let mut transcript = Transcript::default();
    transcript.push_user("hello");
    transcript.push_assistant("hi");

    let turns = transcript.turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(transcript.last().unwrap().text, "hi");
}
