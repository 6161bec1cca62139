//! Schema builder: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SchemaBuilderProps`, `SchemaBuilderComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Seed the field model from the optional `initial_fields` prop, or start
//!   with a single empty field.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod sections;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SchemaBuilderProps;
pub use state::SchemaBuilderComponent;

impl Component for SchemaBuilderComponent {
    type Message = Msg;
    type Properties = SchemaBuilderProps;

    fn create(ctx: &Context<Self>) -> Self {
        SchemaBuilderComponent::new(ctx.props().initial_fields.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
