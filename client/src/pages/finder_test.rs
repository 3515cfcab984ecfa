use super::*;
use crate::net::types::MentorFilters;
use crate::state::mentors::{reduce, MentorsState};

#[test]
fn search_patch_trims_and_resets_page() {
    let patch = search_patch("  rust  ");
    assert_eq!(patch.search.as_deref(), Some("rust"));
    assert_eq!(patch.page, Some(1));
    assert_eq!(patch.skill, None);
}

#[test]
fn skill_patch_keeps_search() {
    let mut state = MentorsState::default();
    reduce(&mut state, MentorsAction::SetFilters(search_patch("ana")));
    reduce(&mut state, MentorsAction::SetFilters(skill_patch("Python")));
    assert_eq!(
        state.filters,
        MentorFilters {
            skill: "Python".to_owned(),
            search: "ana".to_owned(),
            page: 1,
        }
    );
}

#[test]
fn empty_skill_means_all_skills() {
    let mut state = MentorsState::default();
    reduce(&mut state, MentorsAction::SetFilters(skill_patch("Python")));
    reduce(&mut state, MentorsAction::SetFilters(skill_patch("")));
    assert_eq!(state.filters, MentorFilters::default());
}
