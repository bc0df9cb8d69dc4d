//! Opening extracted URLs.

use std::io::{self, Write};

use crate::error::OpenError;

/// Something that can show a URL to the user, normally as a new background tab.
pub trait TabOpener {
    fn open_tab(&mut self, url: &str) -> Result<(), OpenError>;
}

impl<T: TabOpener + ?Sized> TabOpener for Box<T> {
    fn open_tab(&mut self, url: &str) -> Result<(), OpenError> {
        (**self).open_tab(url)
    }
}

/// Hands URLs to the desktop: the default browser, or `browser` when set.
///
/// Launches are detached so the caller never waits on the browser process.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    browser: Option<String>,
}

impl SystemOpener {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }
}

impl TabOpener for SystemOpener {
    fn open_tab(&mut self, url: &str) -> Result<(), OpenError> {
        let launched = match &self.browser {
            Some(app) => open::with_detached(url, app.as_str()),
            None => open::that_detached(url),
        };
        launched.map_err(|source| OpenError::Launch {
            url: url.to_string(),
            source,
        })
    }
}

/// Writes each URL on its own line instead of opening it.
#[derive(Debug)]
pub struct PrintOpener<W> {
    out: W,
}

impl PrintOpener<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> PrintOpener<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TabOpener for PrintOpener<W> {
    fn open_tab(&mut self, url: &str) -> Result<(), OpenError> {
        writeln!(self.out, "{url}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Open `url`, logging instead of failing: tab opening is fire-and-forget.
pub fn open_or_warn<O: TabOpener + ?Sized>(opener: &mut O, url: &str) {
    if let Err(err) = opener.open_tab(url) {
        tracing::warn!(%url, error = %err, "failed to open tab");
    }
}
