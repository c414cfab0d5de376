use std::rc::Rc;

use log::warn;

use crate::config::{MAX_FILES, MAX_FILE_SIZE};
use crate::uploads::object_url::{DisplayUrl, ObjectUrlStore};

/// The bits of a dropped or picked file the guard looks at.
pub trait ImageCandidate {
    fn file_name(&self) -> String;
    fn media_type(&self) -> String;
    fn byte_size(&self) -> u64;
}

impl ImageCandidate for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn media_type(&self) -> String {
        self.type_()
    }

    fn byte_size(&self) -> u64 {
        self.size() as u64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttachedFile<F> {
    pub file: F,
    pub url: Rc<DisplayUrl>,
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

#[derive(Debug, PartialEq)]
pub struct Intake<F> {
    pub accepted: Vec<AttachedFile<F>>,
    pub rejected: Vec<String>,
}

pub fn count_limit_message() -> String {
    format!("You can only upload up to {} images.", MAX_FILES)
}

/// Per-file checks; `None` means the file may be attached.
pub fn check_file(file: &impl ImageCandidate) -> Option<String> {
    if !file.media_type().starts_with("image/") {
        return Some(format!("\"{}\" is not an image file.", file.file_name()));
    }
    if file.byte_size() > MAX_FILE_SIZE {
        return Some(format!("\"{}\" exceeds the 5MB size limit.", file.file_name()));
    }
    None
}

/// The count limit is all-or-nothing for the batch; otherwise each file is
/// judged on its own and valid files survive invalid neighbours.
pub fn admit_files<S>(existing_count: usize, incoming: Vec<S::File>, store: &S) -> Intake<S::File>
where
    S: ObjectUrlStore,
    S::File: ImageCandidate,
{
    if existing_count + incoming.len() > MAX_FILES {
        return Intake {
            accepted: Vec::new(),
            rejected: vec![count_limit_message()],
        };
    }

    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for file in incoming {
        if let Some(message) = check_file(&file) {
            rejected.push(message);
            continue;
        }
        match DisplayUrl::mint(store, &file) {
            Ok(url) => accepted.push(AttachedFile {
                name: file.file_name(),
                size: file.byte_size(),
                media_type: file.media_type(),
                url: Rc::new(url),
                file,
            }),
            Err(e) => {
                warn!("Could not create preview for {}: {}", file.file_name(), e);
                rejected.push(format!("\"{}\" could not be previewed.", file.file_name()));
            }
        }
    }
    Intake { accepted, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uploads::object_url::testing::{FakeFile, FakeUrls};

    impl ImageCandidate for FakeFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn media_type(&self) -> String {
            self.media_type.clone()
        }

        fn byte_size(&self) -> u64 {
            self.size
        }
    }

    const MB: u64 = 1024 * 1024;

    #[test]
    fn batch_over_the_limit_is_rejected_whole() {
        let urls = FakeUrls::default();
        let batch = vec![
            FakeFile::image("1.jpg", MB),
            FakeFile::image("2.jpg", MB),
            FakeFile::image("3.jpg", MB),
        ];
        let intake = admit_files(8, batch, &urls);
        assert!(intake.accepted.is_empty());
        assert_eq!(intake.rejected, vec!["You can only upload up to 10 images.".to_string()]);
        assert!(urls.live().is_empty());
    }

    #[test]
    fn batch_filling_the_limit_exactly_is_fine() {
        let urls = FakeUrls::default();
        let intake = admit_files(8, vec![FakeFile::image("1.jpg", MB), FakeFile::image("2.jpg", MB)], &urls);
        assert_eq!(intake.accepted.len(), 2);
        assert!(intake.rejected.is_empty());
    }

    #[test]
    fn non_images_are_rejected_by_name() {
        let urls = FakeUrls::default();
        let batch = vec![
            FakeFile::image("beach.jpg", 2 * MB),
            FakeFile::of_type("notes.txt", "text/plain", 100),
        ];
        let intake = admit_files(0, batch, &urls);
        assert_eq!(intake.accepted.len(), 1);
        assert_eq!(intake.accepted[0].name, "beach.jpg");
        assert_eq!(intake.rejected, vec!["\"notes.txt\" is not an image file.".to_string()]);
    }

    #[test]
    fn oversized_images_are_rejected() {
        let urls = FakeUrls::default();
        let batch = vec![
            FakeFile::image("exact.jpg", 5 * MB),
            FakeFile::image("huge.tif", 5 * MB + 1),
        ];
        let intake = admit_files(0, batch, &urls);
        assert_eq!(intake.accepted.len(), 1);
        assert_eq!(intake.rejected, vec!["\"huge.tif\" exceeds the 5MB size limit.".to_string()]);
    }

    #[test]
    fn order_is_preserved() {
        let urls = FakeUrls::default();
        let batch = vec![
            FakeFile::of_type("a.pdf", "application/pdf", 1),
            FakeFile::image("b.jpg", 1),
            FakeFile::image("c.jpg", 6 * MB),
            FakeFile::image("d.jpg", 1),
            FakeFile::of_type("e.doc", "application/msword", 1),
        ];
        let intake = admit_files(0, batch, &urls);
        let names: Vec<_> = intake.accepted.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["b.jpg", "d.jpg"]);
        assert_eq!(
            intake.rejected,
            vec![
                "\"a.pdf\" is not an image file.".to_string(),
                "\"c.jpg\" exceeds the 5MB size limit.".to_string(),
                "\"e.doc\" is not an image file.".to_string(),
            ]
        );
    }

    #[test]
    fn refused_preview_is_reported() {
        let urls = FakeUrls::default();
        urls.refuse("broken.png");
        let intake = admit_files(0, vec![FakeFile::image("broken.png", 1)], &urls);
        assert!(intake.accepted.is_empty());
        assert_eq!(intake.rejected, vec!["\"broken.png\" could not be previewed.".to_string()]);
    }
}
