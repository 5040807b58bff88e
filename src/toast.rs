//! Transient toast notifications, stacked at the bottom-right corner.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::timer::{self, Timeout};

/// How long a toast stays fully visible before fading out.
const VISIBLE_MS: i32 = 4000;
/// Duration of the fade-out transition before the element is removed.
const FADE_MS: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Self::Success => "var(--success)",
            Self::Error => "var(--accent)",
        }
    }
}

/// Shows a toast for `message` and schedules its removal.
///
/// Lifecycle: inserted invisible, faded in on the next animation frame,
/// visible for 4000ms, faded back out over 300ms, then detached. The
/// timers are leaked on purpose; once shown, a toast always completes
/// its run. Concurrent toasts simply coexist.
pub fn show(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(element) = document.create_element("div") else {
        return;
    };

    element.set_class_name(&format!("toast toast-{}", kind.class_suffix()));
    let _ = element.set_attribute("role", "status");
    let _ = element.set_attribute("aria-live", "polite");
    element.set_text_content(Some(message));

    let element: HtmlElement = element.unchecked_into();
    let style = element.style();
    let rules = [
        ("position", "fixed"),
        ("bottom", "24px"),
        ("right", "24px"),
        ("padding", "16px 24px"),
        ("background", kind.background()),
        ("color", "white"),
        ("border-radius", "var(--radius-sm)"),
        ("box-shadow", "var(--shadow-3)"),
        ("font-weight", "500"),
        ("font-size", "0.9375rem"),
        ("z-index", "1000"),
        ("opacity", "0"),
        ("transform", "translateY(10px)"),
        ("transition", "opacity 0.3s ease, transform 0.3s ease"),
        ("max-width", "320px"),
    ];
    for (property, value) in rules {
        let _ = style.set_property(property, value);
    }

    if body.append_child(&element).is_err() {
        return;
    }

    {
        let element = element.clone();
        timer::request_animation_frame(move || {
            let _ = element.style().set_property("opacity", "1");
            let _ = element.style().set_property("transform", "translateY(0)");
        });
    }

    Timeout::new(VISIBLE_MS, move || {
        let _ = element.style().set_property("opacity", "0");
        let _ = element.style().set_property("transform", "translateY(10px)");
        Timeout::new(FADE_MS, move || {
            element.remove();
        })
        .forget();
    })
    .forget();
}
