use common::{Catalog, CitationRegistry, Section};
use std::rc::Rc;
use yew::prelude::*;

use super::section::SectionFrame;
use super::topic::SampleQuestionView;
use crate::components::ui::{Card, CardContent, CardHeader, CardTitle};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub citations: Rc<CitationRegistry>,
    pub visible: bool,
}

#[function_component(VerbalSection)]
pub fn verbal_section(props: &Props) -> Html {
    let catalog = &props.catalog;

    html! {
        <SectionFrame section={Section::Verbal} visible={props.visible}>
            <div class="space-y-6">
                <Card>
                    <CardHeader>
                        <CardTitle>{"Verbal Ability Topics Coverage"}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <h4 class="font-semibold mb-3">{"Main Topics:"}</h4>
                                <div class="space-y-2">
                                    { for catalog.verbal_topics.iter().map(|topic| html! {
                                        <div class="flex justify-between items-center p-2 bg-gray-50 rounded">
                                            <span>{&topic.name}</span>
                                            <span class="bg-yellow-100 text-yellow-800 px-2 py-1 rounded text-xs">
                                                {format!("{} Questions", topic.questions)}
                                            </span>
                                        </div>
                                    }) }
                                </div>
                            </div>
                            <div>
                                <h4 class="font-semibold mb-3">{"Key Skills Tested:"}</h4>
                                <ul class="space-y-1 text-sm">
                                    { for catalog.verbal_skills.iter().map(|skill| html! { <li>{format!("• {}", skill)}</li> }) }
                                </ul>
                            </div>
                        </div>
                    </CardContent>
                </Card>

                <div class="grid gap-4">
                    <Card>
                        <CardHeader>
                            <CardTitle>{"Sample Questions"}</CardTitle>
                        </CardHeader>
                        <CardContent class="space-y-4">
                            { for catalog.verbal_samples.iter().map(|sample| html! {
                                <SampleQuestionView sample={sample.clone()} citations={props.citations.clone()} />
                            }) }
                        </CardContent>
                    </Card>
                </div>
            </div>
        </SectionFrame>
    }
}
