use std::rc::Rc;

use yew::Reducible;

use crate::config::MAX_FILES;
use crate::forms::state::{FormAction, FormState, SubmitPhase};
use crate::forms::submit::AttachmentSummary;
use crate::forms::validation::ContactField;
use crate::uploads::intake::{count_limit_message, AttachedFile, Intake};

/// Everything the contact page holds between renders. Dropping the state
/// drops the attachment handles, which revokes their preview URLs.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactState<F> {
    pub form: FormState<ContactField>,
    pub files: Vec<AttachedFile<F>>,
    pub file_errors: Vec<String>,
    pub drag_active: bool,
}

impl<F> Default for ContactState<F> {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            files: Vec::new(),
            file_errors: Vec::new(),
            drag_active: false,
        }
    }
}

pub enum ContactAction<F> {
    Form(FormAction<ContactField>),
    DragActive(bool),
    Admit(Intake<F>),
    Remove(usize),
    /// "Send another message" after a successful submit.
    StartOver,
}

impl<F: Clone> ContactState<F> {
    pub fn attachment_summaries(&self) -> Vec<AttachmentSummary> {
        self.files
            .iter()
            .map(|entry| AttachmentSummary {
                name: entry.name.clone(),
                size: entry.size,
                media_type: entry.media_type.clone(),
            })
            .collect()
    }

    pub fn apply(&self, action: ContactAction<F>) -> Self {
        let mut next = self.clone();
        match action {
            ContactAction::Form(FormAction::Finished(Ok(()))) => {
                next.form = FormState {
                    phase: SubmitPhase::Succeeded,
                    ..FormState::default()
                };
                next.files.clear();
                next.file_errors.clear();
            }
            ContactAction::Form(action) => {
                next.form = self.form.apply(action);
            }
            ContactAction::DragActive(active) => {
                next.drag_active = active;
            }
            ContactAction::Admit(intake) => {
                next.drag_active = false;
                // The batch was judged against an older snapshot; another
                // batch may have landed in between.
                if self.files.len() + intake.accepted.len() > MAX_FILES {
                    next.file_errors = vec![count_limit_message()];
                } else {
                    next.files.extend(intake.accepted);
                    next.file_errors = intake.rejected;
                }
            }
            ContactAction::Remove(index) => {
                if index < next.files.len() {
                    next.files.remove(index);
                }
            }
            ContactAction::StartOver => {
                next.form = FormState::default();
            }
        }
        next
    }
}

impl<F: Clone + 'static> Reducible for ContactState<F> {
    type Action = ContactAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uploads::intake::admit_files;
    use crate::uploads::object_url::testing::{FakeFile, FakeUrls};

    fn with_files(urls: &FakeUrls, names: &[&str]) -> Rc<ContactState<FakeFile>> {
        let batch: Vec<FakeFile> = names.iter().map(|name| FakeFile::image(name, 1024)).collect();
        let intake = admit_files(0, batch, urls);
        Rc::new(ContactState::default()).reduce(ContactAction::Admit(intake))
    }

    #[test]
    fn admitted_files_are_appended_with_messages() {
        let urls = FakeUrls::default();
        let state = with_files(&urls, &["a.jpg"]);
        let intake = admit_files(
            state.files.len(),
            vec![FakeFile::image("b.jpg", 1), FakeFile::of_type("c.txt", "text/plain", 1)],
            &urls,
        );
        let state = state.reduce(ContactAction::Admit(intake));
        let names: Vec<_> = state.files.iter().map(|entry| entry.name.clone()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
        assert_eq!(state.file_errors, vec!["\"c.txt\" is not an image file.".to_string()]);
    }

    #[test]
    fn new_batch_replaces_old_messages() {
        let urls = FakeUrls::default();
        let state = Rc::new(ContactState::default()).reduce(ContactAction::Admit(admit_files(
            0,
            vec![FakeFile::of_type("x.txt", "text/plain", 1)],
            &urls,
        )));
        assert_eq!(state.file_errors.len(), 1);
        let state = state.reduce(ContactAction::Admit(admit_files(0, vec![FakeFile::image("y.jpg", 1)], &urls)));
        assert!(state.file_errors.is_empty());
    }

    #[test]
    fn removing_an_entry_releases_its_url_for_good() {
        let urls = FakeUrls::default();
        let state = with_files(&urls, &["a.jpg", "b.jpg"]);
        let removed_url = state.files[0].url.as_str().to_string();

        let state = state.reduce(ContactAction::Remove(0));
        assert_eq!(state.files.len(), 1);
        assert_eq!(urls.revoked(), vec![removed_url.clone()]);

        let intake = admit_files(state.files.len(), vec![FakeFile::image("c.jpg", 1)], &urls);
        let state = state.reduce(ContactAction::Admit(intake));
        assert!(state.files.iter().all(|entry| entry.url.as_str() != removed_url));
        assert!(!urls.live().contains(&removed_url));
    }

    #[test]
    fn url_stays_alive_while_an_older_render_holds_it() {
        let urls = FakeUrls::default();
        let state = with_files(&urls, &["a.jpg"]);
        let still_rendered = state.clone();
        let state = state.reduce(ContactAction::Remove(0));
        assert!(state.files.is_empty());
        assert!(urls.revoked().is_empty());
        drop(still_rendered);
        assert_eq!(urls.revoked().len(), 1);
    }

    #[test]
    fn interleaved_batches_cannot_pass_the_limit() {
        let urls = FakeUrls::default();
        let names: Vec<String> = (0..6).map(|i| format!("{}.jpg", i)).collect();
        let first: Vec<_> = names.iter().map(|name| FakeFile::image(name, 1)).collect();
        let second: Vec<_> = names.iter().map(|name| FakeFile::image(name, 1)).collect();

        // Both batches were checked against an empty list.
        let first = admit_files(0, first, &urls);
        let second = admit_files(0, second, &urls);

        let state = Rc::new(ContactState::default()).reduce(ContactAction::Admit(first));
        let state = state.reduce(ContactAction::Admit(second));
        assert_eq!(state.files.len(), 6);
        assert_eq!(state.file_errors, vec!["You can only upload up to 10 images.".to_string()]);
        assert_eq!(urls.live().len(), 6);
    }

    #[test]
    fn successful_submit_clears_fields_and_attachments() {
        let urls = FakeUrls::default();
        let state = with_files(&urls, &["a.jpg", "b.jpg"])
            .reduce(ContactAction::Form(FormAction::Edit(ContactField::Name, "Lin".to_string())))
            .reduce(ContactAction::Form(FormAction::Started))
            .reduce(ContactAction::Form(FormAction::Finished(Ok(()))));
        assert_eq!(state.form.phase, SubmitPhase::Succeeded);
        assert!(state.form.values.is_empty());
        assert!(state.files.is_empty());
        assert!(urls.live().is_empty());

        let state = state.reduce(ContactAction::StartOver);
        assert_eq!(state.form.phase, SubmitPhase::Editing);
    }

    #[test]
    fn teardown_releases_everything() {
        let urls = FakeUrls::default();
        let state = with_files(&urls, &["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(urls.live().len(), 3);
        drop(state);
        assert!(urls.live().is_empty());
        assert_eq!(urls.revoked().len(), 3);
    }
}
