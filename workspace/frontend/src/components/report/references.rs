use common::{CitationMode, CitationRegistry};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::ui::{Card, CardContent, CitationLink};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub citations: Rc<CitationRegistry>,
}

/// Footer listing every registered source.
#[function_component(References)]
pub fn references(props: &Props) -> Html {
    if props.citations.is_empty() {
        return Html::default();
    }

    html! {
        <Card class="w-full">
            <CardContent class="text-xs sm:text-sm text-gray-500 mt-2 sm:mt-4 p-3 sm:p-6">
                <p class="font-semibold">{"References:"}</p>
                <ul class="space-y-1 mt-2">
                    { for props.citations.ids().map(|id| html! {
                        <li key={id.to_string()}>
                            <CitationLink
                                id={id.to_string()}
                                mode={CitationMode::Recommend}
                                citations={props.citations.clone()}
                            />
                        </li>
                    }) }
                </ul>
            </CardContent>
        </Card>
    }
}
