use common::{ReportAction, ReportState};
use std::rc::Rc;
use yew::prelude::*;

/// Yew wrapper around [`ReportState`] so it can back a reducer hook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStore(pub ReportState);

impl Reducible for ReportStore {
    type Action = ReportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("Report action: {:?}", action);
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

/// Page-session state of the report: active section and expanded topics.
#[hook]
pub fn use_report_state() -> UseReducerHandle<ReportStore> {
    use_reducer(ReportStore::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Section;

    #[test]
    fn test_reduce_applies_actions() {
        let store = Rc::new(ReportStore::default());
        let store = store.reduce(ReportAction::SelectSection(Section::Data));
        let store = store.reduce(ReportAction::ToggleTopic("coding".to_string()));

        assert_eq!(store.0.active_section(), Section::Data);
        assert!(store.0.is_expanded("coding"));
    }
}
