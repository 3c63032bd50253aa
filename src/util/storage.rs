//! Persisted session token slot.
//!
//! The token lives under a single `localStorage` key so a session survives
//! reloads and browser restarts until logout or a failed validation clears
//! it. Requires a browser environment; inert on the server.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "edusmart_token";

/// Read the persisted token, if any. Empty strings count as absent.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(token)) = storage.get_item(TOKEN_KEY) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token. Storage errors are ignored; the in-memory session
/// still works for the lifetime of the tab.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
