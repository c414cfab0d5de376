use std::fmt;
use std::rc::Rc;

use web_sys::Url;

/// Where temporary preview URLs come from and go back to.
pub trait ObjectUrlStore: Clone + 'static {
    type File;

    fn create(&self, file: &Self::File) -> Result<String, String>;

    fn revoke(&self, url: &str);
}

/// Owns one object URL. Dropping the handle revokes it, exactly once.
pub struct DisplayUrl {
    url: String,
    release: Rc<dyn Fn(&str)>,
}

impl DisplayUrl {
    pub fn mint<S: ObjectUrlStore>(store: &S, file: &S::File) -> Result<Self, String> {
        let url = store.create(file)?;
        let store = store.clone();
        Ok(Self {
            url,
            release: Rc::new(move |url: &str| store.revoke(url)),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for DisplayUrl {
    fn drop(&mut self) {
        (self.release)(&self.url);
    }
}

impl PartialEq for DisplayUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl fmt::Debug for DisplayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DisplayUrl").field(&self.url).finish()
    }
}

/// `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserObjectUrls;

impl ObjectUrlStore for BrowserObjectUrls {
    type File = web_sys::File;

    fn create(&self, file: &web_sys::File) -> Result<String, String> {
        Url::create_object_url_with_blob(file).map_err(|e| format!("{:?}", e))
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            gloo_console::error!("Failed to revoke object url:", format!("{:?}", e));
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    pub struct FakeFile {
        pub name: String,
        pub media_type: String,
        pub size: u64,
    }

    impl FakeFile {
        pub fn image(name: &str, size: u64) -> Self {
            Self {
                name: name.to_string(),
                media_type: "image/jpeg".to_string(),
                size,
            }
        }

        pub fn of_type(name: &str, media_type: &str, size: u64) -> Self {
            Self {
                name: name.to_string(),
                media_type: media_type.to_string(),
                size,
            }
        }
    }

    #[derive(Default)]
    pub struct Ledger {
        pub next_id: u32,
        pub live: Vec<String>,
        pub revoked: Vec<String>,
        pub refuse: Vec<String>,
    }

    /// Hands out `blob:test/<n>` URLs and records every revoke.
    #[derive(Clone, Default)]
    pub struct FakeUrls(pub Rc<RefCell<Ledger>>);

    impl FakeUrls {
        pub fn live(&self) -> Vec<String> {
            self.0.borrow().live.clone()
        }

        pub fn revoked(&self) -> Vec<String> {
            self.0.borrow().revoked.clone()
        }

        pub fn refuse(&self, name: &str) {
            self.0.borrow_mut().refuse.push(name.to_string());
        }
    }

    impl ObjectUrlStore for FakeUrls {
        type File = FakeFile;

        fn create(&self, file: &FakeFile) -> Result<String, String> {
            let mut ledger = self.0.borrow_mut();
            if ledger.refuse.contains(&file.name) {
                return Err("refused".to_string());
            }
            ledger.next_id += 1;
            let url = format!("blob:test/{}", ledger.next_id);
            ledger.live.push(url.clone());
            Ok(url)
        }

        fn revoke(&self, url: &str) {
            let mut ledger = self.0.borrow_mut();
            ledger.live.retain(|live| live != url);
            ledger.revoked.push(url.to_string());
        }
    }
}
