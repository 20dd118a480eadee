use log::warn;
use wasm_bindgen::JsCast;

/// Marker cookie used to test whether the browsing context stores cookies
pub const COOKIE_MARKER: &str = "__allows_cookies__";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// A single cookie plus the attributes we set on it
#[derive(Debug, Clone, PartialEq)]
pub struct CookieAttributes {
    pub name: String,
    pub value: String,
    pub expires: Option<String>,
    pub same_site: SameSite,
    pub secure: bool,
}

impl CookieAttributes {
    /// Renders the cookie in `Set-Cookie` attribute syntax:
    /// `name=value[; expires=<http-date>]; SameSite=<Lax|None>[; Secure]`
    pub fn serialize(&self) -> String {
        let mut out = format!("{}={}", self.name, self.value);
        if let Some(expires) = &self.expires {
            out.push_str("; expires=");
            out.push_str(expires);
        }
        out.push_str("; SameSite=");
        out.push_str(self.same_site.as_str());
        if self.secure {
            out.push_str("; Secure");
        }
        out
    }
}

/// The browser's cookie jar, seen as a header-like string store. Kept as a
/// trait so the probe can run against a fake jar in tests.
pub trait CookieStore {
    /// Concatenated cookie string for the current context; empty when the
    /// store is unavailable.
    fn read_all(&self) -> String;

    /// Writes one serialized cookie. Fire-and-forget: rejected writes are
    /// not reported.
    fn write(&mut self, cookie: &str);
}

/// `document.cookie` backed store
pub struct DocumentCookies {
    document: web_sys::HtmlDocument,
}

impl DocumentCookies {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        Some(Self { document })
    }
}

impl CookieStore for DocumentCookies {
    fn read_all(&self) -> String {
        // A throwing getter (storage disabled) reads as "no cookies"
        self.document.cookie().unwrap_or_default()
    }

    fn write(&mut self, cookie: &str) {
        let _ = self.document.set_cookie(cookie);
    }
}

/// HTTP-date form of the Unix epoch; setting it as `expires` forces
/// immediate expiry.
fn epoch_http_date() -> String {
    chrono::DateTime::<chrono::Utc>::UNIX_EPOCH
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Checks whether the current browsing context accepts third-party cookies.
///
/// Writes a marker cookie, reads the store back to see whether it was kept,
/// then deletes the marker again. A browser that blocks the write (e.g.
/// `SameSite=None` without a secure context, or cookies disabled outright)
/// makes the probe return `false`; that is the signal, not an error.
pub fn allows_cookies(store: &mut dyn CookieStore, hostname: &str) -> bool {
    let is_local = hostname == "localhost";
    let marker = CookieAttributes {
        name: COOKIE_MARKER.to_string(),
        value: String::new(),
        expires: None,
        same_site: if is_local { SameSite::Lax } else { SameSite::None },
        secure: !is_local,
    };

    store.write(&marker.serialize());
    let support = store.read_all().contains(COOKIE_MARKER);

    // The deletion must carry the same SameSite/Secure pairing as the
    // write, or some browsers will not match the cookie.
    let deletion = CookieAttributes {
        expires: Some(epoch_http_date()),
        ..marker
    };
    store.write(&deletion.serialize());
    if store.read_all().contains(COOKIE_MARKER) {
        warn!("marker cookie survived deletion; leaving it to expire on its own");
    }

    support
}

/// Runs the probe against the live browser context.
pub fn probe_browser() -> bool {
    let hostname = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .unwrap_or_default();
    match DocumentCookies::new() {
        Some(mut store) => allows_cookies(&mut store, &hostname),
        None => false,
    }
}
