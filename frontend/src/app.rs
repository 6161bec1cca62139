use crate::components::footer::Footer;
use crate::components::schema_builder::SchemaBuilderComponent;
use crate::components::theme_selector::ThemeSelector;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-root">
                <main class="app-main">
                    <div class="app-header">
                        <div></div>
                        <h1 class="app-title">{"Yup Schema Builder"}</h1>
                        <ThemeSelector />
                    </div>
                    <SchemaBuilderComponent />
                </main>
                <Footer />
            </div>
        }
    }
}
