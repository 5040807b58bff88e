use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::draft::{self, DraftStore, LocalStorageDraft};
use crate::generate;
use crate::timer::Timeout;
use crate::toast::{self, ToastKind};
use crate::validate::{validate, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Minimum accepted character count, mirrored onto `minlength`.
    #[prop_or(DEFAULT_MIN_LENGTH)]
    pub min_length: usize,
    /// Maximum accepted character count, mirrored onto `maxlength`.
    #[prop_or(DEFAULT_MAX_LENGTH)]
    pub max_length: usize,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // --- Editor state ---
    let content = use_state(String::new);
    let content_ref = use_mut_ref(String::new); // always-current value for callbacks
    let textarea_ref = use_node_ref();

    // --- UI state ---
    let is_loading = use_state(|| false);
    let status = use_state(String::new);

    // Pending autosave timer; replacing it cancels the previous one.
    let pending_save = use_mut_ref(|| Option::<Timeout>::None);

    // --- Draft restore on mount ---
    {
        let content = content.clone();
        let content_ref = content_ref.clone();
        use_effect_with((), move |_| {
            let current = content_ref.borrow().clone();
            if let Some(saved) = draft::restore_if_empty(&LocalStorageDraft, &current) {
                web_sys::console::log_1(&"Restored draft from previous session".into());
                *content_ref.borrow_mut() = saved.clone();
                content.set(saved);
            }
            || {}
        });
    }

    // --- Typing: track value, debounce the autosave ---
    let on_input = {
        let content = content.clone();
        let content_ref = content_ref.clone();
        let pending_save = pending_save.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            content.set(value.clone());
            *content_ref.borrow_mut() = value.clone();

            let save = Timeout::new(draft::AUTOSAVE_DEBOUNCE_MS, move || {
                LocalStorageDraft.save(&value);
            });
            *pending_save.borrow_mut() = Some(save);
        })
    };

    // --- Submit: validate, then run the generation call ---
    let on_submit = {
        let is_loading = is_loading.clone();
        let status = status.clone();
        let content_ref = content_ref.clone();
        let textarea_ref = textarea_ref.clone();
        let min = props.min_length;
        let max = props.max_length;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // The draft is dropped shortly after any submit attempt,
            // including rejected ones.
            Timeout::new(draft::CLEAR_DELAY_MS, || LocalStorageDraft.clear()).forget();

            if *is_loading {
                return;
            }

            let current = content_ref.borrow().clone();
            if let Err(err) = validate(&current, min, max) {
                let message = err.to_string();
                status.set(message.clone());
                toast::show(&message, ToastKind::Error);
                if let Some(textarea) = textarea_ref.cast::<HtmlTextAreaElement>() {
                    let _ = textarea.focus();
                }
                return;
            }

            is_loading.set(true);
            status.set("Generating presentation, please wait...".to_string());

            let is_loading = is_loading.clone();
            let status = status.clone();
            spawn_local(async move {
                match generate::generate_deck(&current).await {
                    Ok(_artifact) => {
                        is_loading.set(false);
                        status.set("Presentation generated successfully!".to_string());
                        toast::show("✓ Presentation generated successfully!", ToastKind::Success);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Deck generation failed: {}", err).into(),
                        );
                        is_loading.set(false);
                        let message = format!("Generation failed: {}", err);
                        status.set(message.clone());
                        toast::show(&message, ToastKind::Error);
                    }
                }
            });
        })
    };

    html! {
        <main class="container">
            <h1>{ "AI Presentation Generator" }</h1>
            <p class="tagline">
                { "Paste your notes or an outline below and get a ready-to-use slide deck." }
            </p>

            <form class="generator-form" onsubmit={on_submit}>
                <label for="content">{ "Presentation content" }</label>
                <textarea
                    id="content"
                    ref={textarea_ref}
                    value={(*content).clone()}
                    oninput={on_input}
                    minlength={props.min_length.to_string()}
                    maxlength={props.max_length.to_string()}
                    rows="12"
                    placeholder="Describe the topic or paste the full text of your material..."
                />
                <button
                    type="submit"
                    class={classes!("btn-primary", (*is_loading).then_some("is-loading"))}
                    disabled={*is_loading}
                >
                    <span class="btn-text">
                        { if *is_loading { "Generating…" } else { "Generate PPTX" } }
                    </span>
                </button>
            </form>

            <p id="status-message" class="visually-hidden" role="status" aria-live="polite">
                { &*status }
            </p>
        </main>
    }
}
