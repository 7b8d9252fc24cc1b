//! Spoken phrases.
//!
//! Editors never build speech text themselves: they push an `Announcement`
//! and the controller renders it through the session's `Phrasebook`. The
//! phrasebook ships with English defaults and every entry can be overridden
//! from the `[phrases]` table of the configuration file.

use serde::{Deserialize, Serialize};

use crate::ports::Utterance;

/// Fixed phrases spoken in response to gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    Dot,
    Dash,
    /// Read-back of an empty translated buffer.
    Empty,
    /// Commit of a sequence no table contains.
    Unrecognized,
    OpenMenu,
    CloseMenu,
    BackToPreviousPage,
    StayOnCurrentPage,
    SubmitForm,
    SubmitQuestion,
    OnlySingleField,
    NoField,
    LastField,
    FirstField,
}

/// Something the controller should say, before phrasebook rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    Phrase(Phrase),
    /// Literal text: a committed token or the joined buffer.
    Text(String),
    /// A removed token, spoken with the deletion marker.
    Deletion(String),
    /// Field change, spoken with the field's name.
    FieldMove(String),
    /// Session start, spoken with the first field's name.
    CurrentField(String),
}

/// Phrase table, one entry per role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Phrasebook {
    pub dot: String,
    pub dash: String,
    pub empty: String,
    pub unrecognized: String,
    pub open_menu: String,
    pub close_menu: String,
    pub back_to_previous_page: String,
    pub stay_on_current_page: String,
    pub submit_form: String,
    pub submit_question: String,
    pub only_single_field: String,
    pub no_field: String,
    pub last_field: String,
    pub first_field: String,
    /// Prefix of a field change announcement, followed by the field name.
    pub move_to_next_field: String,
    /// Prefix of the session start announcement, followed by the field name.
    pub current_field: String,
    /// Marker word spoken before a deleted token.
    pub delete: String,
    /// Label for the last individual result in the context.
    pub result_label: String,
    /// Label for the joined buffer in the context.
    pub combined_label: String,
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self {
            dot: "dot".to_string(),
            dash: "dash".to_string(),
            empty: "empty".to_string(),
            unrecognized: "unrecognized code".to_string(),
            open_menu: "open menu".to_string(),
            close_menu: "close menu".to_string(),
            back_to_previous_page: "back to previous page".to_string(),
            stay_on_current_page: "stay on current page".to_string(),
            submit_form: "submit form".to_string(),
            submit_question: "submit the form? swipe right to submit, swipe left to stay"
                .to_string(),
            only_single_field: "only has single field".to_string(),
            no_field: "has no field".to_string(),
            last_field: "last field".to_string(),
            first_field: "first field".to_string(),
            move_to_next_field: "move to next field".to_string(),
            current_field: "current field".to_string(),
            delete: "delete".to_string(),
            result_label: "result".to_string(),
            combined_label: "combined result".to_string(),
        }
    }
}

impl Phrasebook {
    pub fn get(&self, phrase: Phrase) -> &str {
        match phrase {
            Phrase::Dot => &self.dot,
            Phrase::Dash => &self.dash,
            Phrase::Empty => &self.empty,
            Phrase::Unrecognized => &self.unrecognized,
            Phrase::OpenMenu => &self.open_menu,
            Phrase::CloseMenu => &self.close_menu,
            Phrase::BackToPreviousPage => &self.back_to_previous_page,
            Phrase::StayOnCurrentPage => &self.stay_on_current_page,
            Phrase::SubmitForm => &self.submit_form,
            Phrase::SubmitQuestion => &self.submit_question,
            Phrase::OnlySingleField => &self.only_single_field,
            Phrase::NoField => &self.no_field,
            Phrase::LastField => &self.last_field,
            Phrase::FirstField => &self.first_field,
        }
    }

    /// Render an announcement into the utterance handed to the speech sink.
    pub fn render(&self, announcement: &Announcement) -> Utterance {
        match announcement {
            Announcement::Phrase(phrase) => Utterance::new(self.get(*phrase)),
            Announcement::Text(text) => Utterance::new(text.as_str()),
            Announcement::Deletion(token) => Utterance {
                text: format!("{} {}", self.delete, token),
                deletion: true,
            },
            Announcement::FieldMove(name) => {
                Utterance::new(format!("{}, {}", self.move_to_next_field, name))
            }
            Announcement::CurrentField(name) => {
                Utterance::new(format!("{} {}", self.current_field, name))
            }
        }
    }
}
