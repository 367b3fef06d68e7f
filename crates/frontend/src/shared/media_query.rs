use leptos::ev;
use leptos::prelude::*;

/// Media query for "desktop" viewports
pub fn min_width_query(px: u32) -> String {
    format!("(min-width: {}px)", px)
}

fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Reactive `matchMedia`, re-evaluated on window resize. Falls back to
/// `false` when the window is missing. The listener is removed together
/// with the calling owner.
pub fn use_media_query(query: String) -> ReadSignal<bool> {
    let (matches, set_matches) = signal(media_matches(&query));

    let handle = window_event_listener(ev::resize, move |_| {
        let next = media_matches(&query);
        if matches.get_untracked() != next {
            log::debug!("media query {} -> {}", query, next);
            set_matches.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    matches
}

/// `true` on viewports at least `ui.desktop_breakpoint_px` wide
pub fn use_is_desktop() -> ReadSignal<bool> {
    use_media_query(min_width_query(crate::config::get().ui.desktop_breakpoint_px))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_width_query() {
        assert_eq!(min_width_query(640), "(min-width: 640px)");
    }
}
