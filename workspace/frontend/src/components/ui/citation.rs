use common::{resolve_citation, CitationMode, CitationRegistry};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    #[prop_or_default]
    pub mode: CitationMode,
    pub citations: Rc<CitationRegistry>,
    #[prop_or_default]
    pub class: Classes,
}

/// External link to a registry entry. Renders nothing for unknown ids.
#[function_component(CitationLink)]
pub fn citation_link(props: &Props) -> Html {
    let Some(link) = resolve_citation(&props.id, props.mode, &props.citations) else {
        log::trace!("No citation registered under id {}", props.id);
        return Html::default();
    };

    html! {
        <a
            href={link.href}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("underline", "hover:text-blue-700", props.class.clone())}
            title={link.title}
        >
            {link.label}
        </a>
    }
}
