//! Welcome banner with the collapsible "How to Use" card and help sections.

use leptos::prelude::*;

use crate::i18n::Dictionary;

/// Welcome copy plus on-demand help.
#[component]
pub fn WelcomePanel() -> impl IntoView {
    let dictionary = expect_context::<RwSignal<Dictionary>>();
    let show_help_card = RwSignal::new(false);
    let show_help = RwSignal::new(false);

    let text = move |pick: fn(&Dictionary) -> &String| move || dictionary.with(|d| pick(d).clone());

    view! {
        <div class="welcome-panel">
            <div class="welcome-panel__banner">
                <h2 class="welcome-panel__title">{text(|d| &d.welcome_title)}</h2>
                <p class="welcome-panel__subtitle">{text(|d| &d.welcome_subtitle)}</p>
            </div>

            <div class="welcome-panel__body">
                <Show
                    when=move || show_help_card.get()
                    fallback=move || {
                        view! {
                            <div class="welcome-panel__help-collapsed">
                                <div class="welcome-panel__help-heading">
                                    <span class="welcome-panel__info" aria-hidden="true">"i"</span>
                                    <span>{text(|d| &d.help_title)}</span>
                                </div>
                                <button
                                    type="button"
                                    class="pill-button"
                                    aria-label="Show help"
                                    on:click=move |_| show_help_card.set(true)
                                >
                                    {text(|d| &d.help_show_label)}
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="welcome-panel__help-card">
                        <div class="welcome-panel__help-header">
                            <div class="welcome-panel__help-heading">
                                <span class="welcome-panel__info" aria-hidden="true">"i"</span>
                                <span>{text(|d| &d.help_title)}</span>
                            </div>
                            <div class="welcome-panel__help-actions">
                                <button
                                    type="button"
                                    class="pill-button"
                                    aria-pressed=move || show_help.get().to_string()
                                    on:click=move |_| show_help.update(|v| *v = !*v)
                                >
                                    {text(|d| &d.help_button_label)}
                                </button>
                                <button
                                    type="button"
                                    class="pill-button"
                                    aria-label="Hide help"
                                    on:click=move |_| show_help_card.set(false)
                                >
                                    {text(|d| &d.help_hide_label)}
                                </button>
                            </div>
                        </div>
                        <ol class="welcome-panel__steps">
                            {move || {
                                dictionary
                                    .with(|d| d.help_steps.clone())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, step)| {
                                        view! {
                                            <li>
                                                <span class="welcome-panel__step-number">{format!("{}.", i + 1)}</span>
                                                {step}
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ol>
                    </div>
                </Show>

                <Show when=move || show_help.get()>
                    <div class="welcome-panel__help-sections">
                        <div class="welcome-panel__help-sections-title">{text(|d| &d.help_panel_title)}</div>
                        <div class="welcome-panel__help-sections-scroll">
                            {move || {
                                dictionary
                                    .with(|d| d.help_sections.clone())
                                    .into_iter()
                                    .map(|section| {
                                        view! {
                                            <div class="help-section">
                                                <div class="help-section__title">{section.title}</div>
                                                {section.body.map(|body| view! { <p class="help-section__body">{body}</p> })}
                                                {(!section.items.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <ul class="help-section__items">
                                                                {section
                                                                    .items
                                                                    .into_iter()
                                                                    .map(|item| view! { <li>{item}</li> })
                                                                    .collect_view()}
                                                            </ul>
                                                        }
                                                    })}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
