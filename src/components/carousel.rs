use std::cell::RefCell;
use std::rc::Rc;
use leptos::prelude::*;
use web_sys::HtmlElement;
use roto_core::Options;
use crate::widget::Widget;

/// A carousel container with prev/next controls. Children should be `<li>`
/// items; they are wrapped in the `<ul>` the widget drives.
#[component]
pub fn Carousel(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] options: Option<Options>,
    children: Children,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let options = options.unwrap_or_default();

    // The widget lives as long as this effect; dropping it detaches handlers.
    let widget: Rc<RefCell<Option<Widget>>> = Rc::new(RefCell::new(None));
    Effect::new(move || {
        let Some(div) = container_ref.get() else { return };
        if widget.borrow().is_some() {
            return;
        }
        let container: HtmlElement = div.into();
        match Widget::attach(container, options.clone()) {
            Ok(attached) => *widget.borrow_mut() = attached,
            Err(e) => log::error!("Failed to attach carousel: {:?}", e),
        }
    });

    view! {
        <div
            id=id
            class=class.unwrap_or_else(|| "roto".to_string())
            style=style
            node_ref=container_ref
        >
            <button class="prev" title="Previous">"‹"</button>
            <ul>{children()}</ul>
            <button class="next" title="Next">"›"</button>
        </div>
    }
}
