use salon_atoms::stylists::{Gender, StylistRecord};
use serde::Serialize;

use crate::filters::RosterFilter;
use crate::loader::Roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Summary,
    List,
}

/// At most one modal is open; opening another replaces it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Details(String),
    Edit(String),
    ConfirmDelete(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ShowSummary,
    ShowList,
    SetCityFilter(String),
    SetGenderFilter(Option<Gender>),
    ClearFilters,
    OpenDetails(String),
    OpenEdit(String),
    RequestDelete(String),
    CloseModal,
    Succeeded(String),
    Failed(String),
    Deleted { id: String, message: String },
    DismissMessage,
}

/// Dashboard UI state. Every event produces a new value through `update`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardView {
    pub mode: ViewMode,
    pub filter: RosterFilter,
    pub modal: Modal,
    pub message: Option<StatusMessage>,
}

impl DashboardView {
    pub fn update(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::ShowSummary => Self { mode: ViewMode::Summary, ..self },
            ViewEvent::ShowList => Self { mode: ViewMode::List, ..self },
            ViewEvent::SetCityFilter(city) => Self {
                filter: RosterFilter { city, ..self.filter.clone() },
                ..self
            },
            ViewEvent::SetGenderFilter(gender) => Self {
                filter: RosterFilter { gender, ..self.filter.clone() },
                ..self
            },
            ViewEvent::ClearFilters => Self {
                filter: RosterFilter::default(),
                ..self
            },
            ViewEvent::OpenDetails(id) => Self { modal: Modal::Details(id), ..self },
            ViewEvent::OpenEdit(id) => Self { modal: Modal::Edit(id), ..self },
            ViewEvent::RequestDelete(id) => Self {
                modal: Modal::ConfirmDelete(id),
                ..self
            },
            ViewEvent::CloseModal => Self { modal: Modal::Closed, ..self },
            // a successful save closes the editor, other modals stay
            ViewEvent::Succeeded(text) => {
                let modal = match self.modal {
                    Modal::Edit(id) => Modal::Details(id),
                    other => other,
                };
                Self {
                    modal,
                    message: Some(StatusMessage { text, is_error: false }),
                    ..self
                }
            }
            ViewEvent::Failed(text) => Self {
                message: Some(StatusMessage { text, is_error: true }),
                ..self
            },
            ViewEvent::Deleted { id, message } => {
                let modal = match self.modal {
                    Modal::Details(open) | Modal::Edit(open) | Modal::ConfirmDelete(open) if open != id => {
                        Modal::Details(open)
                    }
                    _ => Modal::Closed,
                };
                Self {
                    modal,
                    message: Some(StatusMessage {
                        text: message,
                        is_error: false,
                    }),
                    ..self
                }
            }
            ViewEvent::DismissMessage => Self { message: None, ..self },
        }
    }

    /// Records the list view shows
    pub fn visible<'a>(&self, roster: &'a Roster) -> Vec<&'a StylistRecord> {
        self.filter.apply(roster.stylists())
    }

    /// The record the open modal is about, if any
    pub fn selected(&self) -> Option<&str> {
        match &self.modal {
            Modal::Closed => None,
            Modal::Details(id) | Modal::Edit(id) | Modal::ConfirmDelete(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{stylist, with_gender};

    #[test]
    fn defaults_to_summary_with_nothing_open() {
        let view = DashboardView::default();
        assert_eq!(view.mode, ViewMode::Summary);
        assert!(view.filter.is_empty());
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn opening_a_modal_replaces_the_previous_one() {
        let view = DashboardView::default()
            .update(ViewEvent::OpenDetails("1".to_string()))
            .update(ViewEvent::RequestDelete("2".to_string()));
        assert_eq!(view.modal, Modal::ConfirmDelete("2".to_string()));
        assert_eq!(view.selected(), Some("2"));
    }

    #[test]
    fn filters_compose_and_clear() {
        let roster = Roster::new(vec![
            with_gender(stylist("1", "a@x.com", "Leeds", "Hair"), Gender::Female),
            with_gender(stylist("2", "b@x.com", "Leeds", "Nails"), Gender::Male),
            stylist("3", "c@x.com", "York", "Hair"),
        ]);

        let view = DashboardView::default()
            .update(ViewEvent::ShowList)
            .update(ViewEvent::SetCityFilter("leeds".to_string()))
            .update(ViewEvent::SetGenderFilter(Some(Gender::Male)));
        let ids: Vec<&str> = view.visible(&roster).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        let cleared = view.update(ViewEvent::ClearFilters);
        assert_eq!(cleared.mode, ViewMode::List);
        let ids: Vec<&str> = cleared.visible(&roster).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn saving_an_edit_returns_to_details() {
        let view = DashboardView::default()
            .update(ViewEvent::OpenEdit("4".to_string()))
            .update(ViewEvent::Succeeded("Stylist updated successfully!".to_string()));
        assert_eq!(view.modal, Modal::Details("4".to_string()));
        assert_eq!(view.message.as_ref().map(|m| m.is_error), Some(false));

        let dismissed = view.update(ViewEvent::DismissMessage);
        assert!(dismissed.message.is_none());
    }

    #[test]
    fn failure_keeps_the_modal_open() {
        let view = DashboardView::default()
            .update(ViewEvent::OpenEdit("4".to_string()))
            .update(ViewEvent::Failed("Failed to update stylist".to_string()));
        assert_eq!(view.modal, Modal::Edit("4".to_string()));
        assert!(view.message.unwrap().is_error);
    }

    #[test]
    fn deleting_the_selected_record_closes_its_modal() {
        let view = DashboardView::default()
            .update(ViewEvent::RequestDelete("4".to_string()))
            .update(ViewEvent::Deleted {
                id: "4".to_string(),
                message: "Stylist deleted successfully!".to_string(),
            });
        assert_eq!(view.modal, Modal::Closed);
        assert_eq!(view.selected(), None);
    }
}
