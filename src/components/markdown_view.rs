//! Markdown rendering component

use yew::prelude::*;

use crate::utils::render_markdown;

#[derive(Properties, PartialEq)]
pub struct MarkdownViewProps {
    pub content: AttrValue,
}

#[function_component(MarkdownView)]
pub fn markdown_view(props: &MarkdownViewProps) -> Html {
    let html = use_memo(props.content.clone(), |content| render_markdown(content));

    html! {
        <div class="markdown-content">
            {Html::from_html_unchecked(AttrValue::from((*html).clone()))}
        </div>
    }
}
