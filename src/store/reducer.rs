//! Upvote Reducer
//!
//! State transitions for the upvote lists. Actions use the same JSON shape as the
//! persisted UI events: `{"type": "TOGGLE_LIST", "payload": {"listId": "..."}}`.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::defaults::default_state;
use crate::models::{new_id, Upvote, UpvoteList, UpvoteState};

/// Actions accepted by [`reduce`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpvoteAction {
    /// Flip `is_selected` on every list with this id
    ToggleList {
        #[serde(rename = "listId")]
        list_id: Option<String>,
    },
    /// Append a fresh upvote to every list with this id
    AddUpvote {
        #[serde(rename = "listId")]
        list_id: Option<String>,
    },
    /// Append a new list.
    ///
    /// `None` generates an id; `Some(None)` is an explicit `null` id.
    CreateList {
        #[serde(rename = "listId", skip_serializing_if = "Option::is_none")]
        list_id: Option<Option<String>>,
    },
    /// Replace the whole state
    LoadFromStorage { data: UpvoteState },
    /// Back to the seeded lists
    ResetAll,
    /// Any other action type; leaves state untouched
    Unknown,
}

/// `{type, payload}` before the type is known
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

#[derive(Deserialize)]
struct ListIdPayload {
    #[serde(rename = "listId", default)]
    list_id: Option<String>,
}

#[derive(Deserialize)]
struct CreateListPayload {
    #[serde(rename = "listId", default, deserialize_with = "explicit_list_id")]
    list_id: Option<Option<String>>,
}

#[derive(Deserialize)]
struct LoadPayload {
    data: UpvoteState,
}

/// A present `listId` key, even `null`, is an explicit id
fn explicit_list_id<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Decode a payload; a missing or `null` payload reads as `{}`
fn payload<T: DeserializeOwned>(payload: Option<Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(payload.unwrap_or_else(|| Value::Object(Default::default())))
}

impl<'de> Deserialize<'de> for UpvoteAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAction::deserialize(deserializer)?;
        let action = match raw.kind.as_str() {
            "TOGGLE_LIST" => payload::<ListIdPayload>(raw.payload)
                .map(|p| Self::ToggleList { list_id: p.list_id }),
            "ADD_UPVOTE" => payload::<ListIdPayload>(raw.payload)
                .map(|p| Self::AddUpvote { list_id: p.list_id }),
            "CREATE_LIST" => payload::<CreateListPayload>(raw.payload)
                .map(|p| Self::CreateList { list_id: p.list_id }),
            "LOAD_FROM_STORAGE" => {
                payload::<LoadPayload>(raw.payload).map(|p| Self::LoadFromStorage { data: p.data })
            }
            "RESET_ALL" => Ok(Self::ResetAll),
            _ => Ok(Self::Unknown),
        };
        action.map_err(D::Error::custom)
    }
}

impl UpvoteAction {
    pub fn toggle_list(list_id: impl Into<String>) -> Self {
        Self::ToggleList { list_id: Some(list_id.into()) }
    }

    pub fn add_upvote(list_id: impl Into<String>) -> Self {
        Self::AddUpvote { list_id: Some(list_id.into()) }
    }

    /// Create a list with a generated id
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn create_list() -> Self {
        Self::CreateList { list_id: None }
    }

    /// Create a list with exactly this id, duplicates and `None` included
    pub fn create_list_with_id(list_id: Option<String>) -> Self {
        Self::CreateList { list_id: Some(list_id) }
    }

    /// Parse a raw action
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Action type name, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ToggleList { .. } => "TOGGLE_LIST",
            Self::AddUpvote { .. } => "ADD_UPVOTE",
            Self::CreateList { .. } => "CREATE_LIST",
            Self::LoadFromStorage { .. } => "LOAD_FROM_STORAGE",
            Self::ResetAll => "RESET_ALL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Apply `action` to `state`
pub fn reduce(mut state: UpvoteState, action: UpvoteAction) -> UpvoteState {
    match action {
        UpvoteAction::ToggleList { list_id } => {
            for list in matching(&mut state.lists, list_id.as_deref()) {
                list.is_selected = !list.is_selected;
            }
            state
        }
        UpvoteAction::AddUpvote { list_id } => {
            for list in matching(&mut state.lists, list_id.as_deref()) {
                list.upvotes.push(Upvote::new());
            }
            state
        }
        UpvoteAction::CreateList { list_id } => {
            let id = list_id.unwrap_or_else(|| Some(new_id()));
            state.lists.push(UpvoteList::new(id));
            state
        }
        UpvoteAction::LoadFromStorage { data } => data,
        UpvoteAction::ResetAll => default_state(),
        UpvoteAction::Unknown => state,
    }
}

fn matching<'a>(
    lists: &'a mut [UpvoteList],
    list_id: Option<&'a str>,
) -> impl Iterator<Item = &'a mut UpvoteList> + 'a {
    lists.iter_mut().filter(move |list| list.matches(list_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial_state() -> UpvoteState {
        UpvoteState::new(vec![
            UpvoteList {
                id: Some("1".to_string()),
                is_selected: false,
                upvotes: vec![Upvote { id: "u1".to_string() }, Upvote { id: "u2".to_string() }],
            },
            UpvoteList {
                id: Some("2".to_string()),
                is_selected: true,
                upvotes: vec![Upvote { id: "u3".to_string() }],
            },
        ])
    }

    fn counts(state: &UpvoteState) -> Vec<usize> {
        state.lists.iter().map(|l| l.upvotes.len()).collect()
    }

    fn selection(state: &UpvoteState) -> Vec<bool> {
        state.lists.iter().map(|l| l.is_selected).collect()
    }

    #[test]
    fn test_toggle_list() {
        let state = reduce(initial_state(), UpvoteAction::toggle_list("1"));
        assert_eq!(selection(&state), vec![true, true]);

        let state = reduce(state, UpvoteAction::toggle_list("2"));
        assert_eq!(selection(&state), vec![true, false]);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let before = initial_state();
        assert_eq!(reduce(before.clone(), UpvoteAction::toggle_list("999")), before);
        assert_eq!(reduce(before.clone(), UpvoteAction::ToggleList { list_id: None }), before);
    }

    #[test]
    fn test_toggle_null_id_does_not_match_null_list() {
        let mut before = initial_state();
        before.lists.push(UpvoteList::new(None));
        let after = reduce(before.clone(), UpvoteAction::ToggleList { list_id: None });
        assert_eq!(after, before);
    }

    #[test]
    fn test_toggle_flips_every_duplicate() {
        let state = reduce(initial_state(), UpvoteAction::create_list_with_id(Some("1".to_string())));
        let state = reduce(state, UpvoteAction::toggle_list("1"));
        assert_eq!(selection(&state), vec![true, true, true]);
    }

    #[test]
    fn test_add_upvote() {
        let state = reduce(initial_state(), UpvoteAction::add_upvote("1"));
        assert_eq!(counts(&state), vec![3, 1]);
        let added = &state.lists[0].upvotes[2];
        assert!(!added.id.is_empty());
        assert_ne!(added.id, "u1");
    }

    #[test]
    fn test_add_upvote_missing_id_is_noop() {
        let state = reduce(initial_state(), UpvoteAction::add_upvote("999"));
        assert_eq!(counts(&state), vec![2, 1]);
        let state = reduce(state, UpvoteAction::AddUpvote { list_id: None });
        assert_eq!(counts(&state), vec![2, 1]);
    }

    #[test]
    fn test_create_list_with_id() {
        let state = reduce(initial_state(), UpvoteAction::create_list_with_id(Some("new-list".to_string())));
        assert_eq!(state.lists.len(), 3);
        assert_eq!(state.lists[2], UpvoteList::new(Some("new-list".to_string())));
    }

    #[test]
    fn test_create_list_generates_id() {
        let state = reduce(initial_state(), UpvoteAction::create_list());
        assert_eq!(state.lists.len(), 3);
        let created = &state.lists[2];
        assert!(created.id.as_deref().is_some_and(|id| !id.is_empty()));
        assert!(!created.is_selected);
        assert!(created.upvotes.is_empty());
    }

    #[test]
    fn test_create_list_keeps_null_and_empty_ids() {
        let state = reduce(initial_state(), UpvoteAction::create_list_with_id(None));
        assert_eq!(state.lists[2].id, None);

        let state = reduce(initial_state(), UpvoteAction::create_list_with_id(Some(String::new())));
        assert_eq!(state.lists[2].id.as_deref(), Some(""));
    }

    #[test]
    fn test_create_list_allows_duplicates() {
        let state = reduce(initial_state(), UpvoteAction::create_list_with_id(Some("1".to_string())));
        assert_eq!(state.lists.len(), 3);
        assert_eq!(state.lists.iter().filter(|l| l.matches(Some("1"))).count(), 2);
    }

    #[test]
    fn test_load_from_storage_replaces_state() {
        let data = UpvoteState::new(vec![UpvoteList {
            id: Some("loaded".to_string()),
            is_selected: true,
            upvotes: vec![],
        }]);
        let state = reduce(initial_state(), UpvoteAction::LoadFromStorage { data: data.clone() });
        assert_eq!(state, data);
    }

    #[test]
    fn test_reset_all() {
        let state = reduce(initial_state(), UpvoteAction::ResetAll);
        assert_eq!(counts(&state), vec![3, 2, 5]);
        assert_eq!(selection(&state), vec![false, true, false]);
    }

    #[test]
    fn test_unknown_action_passes_through() {
        let before = initial_state();
        assert_eq!(reduce(before.clone(), UpvoteAction::Unknown), before);
    }

    #[test]
    fn test_parse_raw_actions() {
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"TOGGLE_LIST","payload":{"listId":"1"}}"#).unwrap(),
            UpvoteAction::toggle_list("1")
        );
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"ADD_UPVOTE","payload":{"listId":null}}"#).unwrap(),
            UpvoteAction::AddUpvote { list_id: None }
        );
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"TOGGLE_LIST","payload":{}}"#).unwrap(),
            UpvoteAction::ToggleList { list_id: None }
        );
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"RESET_ALL"}"#).unwrap(),
            UpvoteAction::ResetAll
        );
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"SOMETHING_ELSE"}"#).unwrap(),
            UpvoteAction::Unknown
        );
    }

    #[test]
    fn test_parse_unknown_action_with_payload() {
        let action = UpvoteAction::from_json(r#"{"type":"RENAME_LIST","payload":{"listId":"1"}}"#).unwrap();
        assert_eq!(action, UpvoteAction::Unknown);
        assert_eq!(reduce(initial_state(), action), initial_state());
    }

    #[test]
    fn test_parse_ignores_reset_all_payload() {
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"RESET_ALL","payload":{}}"#).unwrap(),
            UpvoteAction::ResetAll
        );
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"RESET_ALL","payload":{"force":true}}"#).unwrap(),
            UpvoteAction::ResetAll
        );
    }

    #[test]
    fn test_parse_null_or_missing_payload() {
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"TOGGLE_LIST","payload":null}"#).unwrap(),
            UpvoteAction::ToggleList { list_id: None }
        );
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"CREATE_LIST"}"#).unwrap(),
            UpvoteAction::create_list()
        );
    }

    #[test]
    fn test_parse_load_from_storage() {
        let action = UpvoteAction::from_json(
            r#"{"type":"LOAD_FROM_STORAGE","payload":{"data":{"lists":[{"id":"a","isSelected":true,"upvotes":[{"id":"u"}]}]}}}"#,
        )
        .unwrap();
        let UpvoteAction::LoadFromStorage { data } = action else {
            panic!("expected LOAD_FROM_STORAGE, got {:?}", action);
        };
        assert_eq!(data.lists.len(), 1);
        assert!(data.lists[0].is_selected);
        assert_eq!(data.lists[0].upvotes[0].id, "u");
    }

    #[test]
    fn test_parse_rejects_malformed_known_actions() {
        assert!(UpvoteAction::from_json(r#"{"type":"LOAD_FROM_STORAGE","payload":{}}"#).is_err());
        assert!(UpvoteAction::from_json(r#"{"type":"TOGGLE_LIST","payload":{"listId":7}}"#).is_err());
        assert!(UpvoteAction::from_json(r#"{"payload":{}}"#).is_err());
    }

    #[test]
    fn test_parse_create_list_distinguishes_absent_and_null() {
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"CREATE_LIST","payload":{}}"#).unwrap(),
            UpvoteAction::create_list()
        );
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"CREATE_LIST","payload":{"listId":null}}"#).unwrap(),
            UpvoteAction::create_list_with_id(None)
        );
        assert_eq!(
            UpvoteAction::from_json(r#"{"type":"CREATE_LIST","payload":{"listId":""}}"#).unwrap(),
            UpvoteAction::create_list_with_id(Some(String::new()))
        );
    }

    #[test]
    fn test_serialize_action_shape() {
        let json = serde_json::to_string(&UpvoteAction::toggle_list("a")).unwrap();
        assert_eq!(json, r#"{"type":"TOGGLE_LIST","payload":{"listId":"a"}}"#);
    }
}
