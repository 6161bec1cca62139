use yew::{html, Component, Context, Html};

const REPOSITORY_URL: &str = "https://github.com/musama619/yup-schema-builder";

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="app-footer">
                <a class="pill" href={REPOSITORY_URL} target="_blank" rel="noopener noreferrer">
                    {"★ Star on GitHub"}
                </a>
                <a
                    class="pill"
                    href={format!("{REPOSITORY_URL}/issues/new")}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"🐞 Report Issue"}
                </a>
            </footer>
        }
    }
}
