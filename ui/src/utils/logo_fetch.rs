//! Background loading of the logo image.
//!
//! URLs are fetched with `ehttp` (fire-and-forget); local paths are read
//! synchronously. Either way the decoded result comes back over a flume
//! channel that the app drains each frame, so the UI thread never blocks on
//! the network.

use flume::Sender;
use qrstudio_business::{LogoImage, decode_logo};

/// Outcome of a logo load, delivered on the app's channel.
#[derive(Debug, Clone)]
pub enum LogoFetchResult {
    Loaded(LogoImage),
    Failed { source: String, reason: String },
}

/// Kick off a logo load for `source` (http(s) URL or local path).
///
/// Completion is not awaited; a repaint is requested when the result lands
/// so the preview picks it up on the next frame.
pub fn request_logo(source: &str, sender: Sender<LogoFetchResult>, ctx: egui::Context) {
    let source = source.trim().to_owned();
    if source.is_empty() {
        return;
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        log::debug!("fetching logo from {source}");
        let request = ehttp::Request::get(&source);
        ehttp::fetch(request, move |result| {
            let outcome = match result {
                Ok(response) if response.ok => match decode_logo(&response.bytes) {
                    Ok(image) => LogoFetchResult::Loaded(image),
                    Err(e) => LogoFetchResult::Failed {
                        source: source.clone(),
                        reason: e.to_string(),
                    },
                },
                Ok(response) => LogoFetchResult::Failed {
                    source: source.clone(),
                    reason: format!("HTTP {}", response.status),
                },
                Err(e) => LogoFetchResult::Failed {
                    source: source.clone(),
                    reason: e,
                },
            };
            // The receiver may be gone if the app shut down mid-fetch.
            let _ = sender.send(outcome);
            ctx.request_repaint();
        });
    } else {
        let outcome = load_local(&source);
        let _ = sender.send(outcome);
        ctx.request_repaint();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_local(path: &str) -> LogoFetchResult {
    match std::fs::read(path) {
        Ok(bytes) => match decode_logo(&bytes) {
            Ok(image) => LogoFetchResult::Loaded(image),
            Err(e) => LogoFetchResult::Failed {
                source: path.to_owned(),
                reason: e.to_string(),
            },
        },
        Err(e) => LogoFetchResult::Failed {
            source: path.to_owned(),
            reason: e.to_string(),
        },
    }
}

#[cfg(target_arch = "wasm32")]
fn load_local(path: &str) -> LogoFetchResult {
    LogoFetchResult::Failed {
        source: path.to_owned(),
        reason: "local file access is not available on web".to_owned(),
    }
}
