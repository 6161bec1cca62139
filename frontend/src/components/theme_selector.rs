//! Light / dark / system theme picker.
//!
//! The choice is remembered in `localStorage` and applied as a `light` or
//! `dark` class on the document root; `system` follows the
//! `prefers-color-scheme` media query at the time it is applied.

use yew::prelude::*;

const STORAGE_KEY: &str = "vite-ui-theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    System,
}

impl Theme {
    const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Theme::Light => "☀ Light",
            Theme::Dark => "☾ Dark",
            Theme::System => "🖥 System",
        }
    }

    fn parse(value: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|theme| theme.as_str() == value)
    }
}

pub enum Msg {
    SetTheme(Theme),
}

pub struct ThemeSelector {
    theme: Theme,
}

impl Component for ThemeSelector {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let theme = stored_theme().unwrap_or_default();
        apply_theme(theme);
        Self { theme }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTheme(theme) => {
                if self.theme == theme {
                    return false;
                }
                self.theme = theme;
                store_theme(theme);
                apply_theme(theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().batch_callback(|e: Event| {
            let value = e.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
            Theme::parse(&value).map(Msg::SetTheme)
        });

        html! {
            <select class="theme-selector" {onchange}>
                {
                    for Theme::ALL.iter().map(|theme| html! {
                        <option value={theme.as_str()} selected={*theme == self.theme}>
                            { theme.label() }
                        </option>
                    })
                }
            </select>
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn stored_theme() -> Option<Theme> {
    local_storage()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|value| Theme::parse(&value))
}

fn store_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
            gloo_console::warn!("Could not persist the theme preference");
        }
    }
}

/// Sets the `light`/`dark` class on `<html>`, resolving `system` first.
fn apply_theme(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let resolved = match theme {
        Theme::System => {
            let prefers_dark = window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .is_some_and(|query| query.matches());
            if prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
        explicit => explicit,
    };

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        classes.remove_2("light", "dark").ok();
        classes.add_1(resolved.as_str()).ok();
    }
}
