use common::{Catalog, CitationMode, CitationRegistry, Section};
use std::rc::Rc;
use yew::prelude::*;

use super::section::{bullet_list, SectionFrame};
use crate::components::ui::{Card, CardContent, CardHeader, CardTitle, CitationLink};

const STUDY_PLAN: [(&str, &str, &str, &str); 4] = [
    ("Week 1-2", "Quantitative Aptitude", "Focus on basics and formulas", "blue"),
    ("Week 3-4", "Logical Reasoning", "Pattern recognition and logic", "green"),
    ("Week 5-6", "Verbal Ability", "Grammar and comprehension", "yellow"),
    ("Week 7-8", "Mock Tests & DI", "Full practice and timing", "red"),
];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub citations: Rc<CitationRegistry>,
    pub visible: bool,
}

#[function_component(ResourcesSection)]
pub fn resources_section(props: &Props) -> Html {
    html! {
        <SectionFrame section={Section::Resources} visible={props.visible}>
            <div class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    { for props.catalog.resources.iter().map(|resource| html! {
                        <Card key={resource.name.clone()}>
                            <CardHeader>
                                <CardTitle class="flex items-center gap-2">
                                    <i class="fas fa-external-link-alt"></i>
                                    {&resource.name}
                                </CardTitle>
                            </CardHeader>
                            <CardContent>
                                <img src={resource.image.clone()} alt={resource.image_alt.clone()} class="w-full rounded-lg mb-3" />
                                <p class="text-sm text-gray-600 mb-3">{&resource.description}</p>
                                <div class="flex items-center gap-2 text-xs text-blue-600">
                                    <i class="fas fa-external-link-alt"></i>
                                    <CitationLink
                                        id={resource.citation.clone()}
                                        mode={CitationMode::Recommend}
                                        citations={props.citations.clone()}
                                    />
                                </div>
                            </CardContent>
                        </Card>
                    }) }
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="flex items-center gap-2">
                            <i class="fas fa-clock"></i>
                            {"Recommended Study Plan"}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                            { for STUDY_PLAN.iter().map(|(weeks, subject, focus, color)| html! {
                                <div class={classes!("text-center", "p-4", "rounded-lg", format!("bg-{}-50", color))}>
                                    <div class={classes!("font-bold", "text-lg", format!("text-{}-600", color))}>{*weeks}</div>
                                    <div class="text-sm">{*subject}</div>
                                    <div class="text-xs text-gray-600 mt-1">{*focus}</div>
                                </div>
                            }) }
                        </div>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle class="flex items-center gap-2">
                            <i class="fas fa-lightbulb"></i>
                            {"Key Preparation Tips"}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <h4 class="font-semibold mb-2">{"Study Strategy:"}</h4>
                                {bullet_list(&[
                                    "Start with your weakest section first",
                                    "Practice time management regularly",
                                    "Take full-length mock tests weekly",
                                    "Review mistakes and understand concepts",
                                    "Focus on accuracy over speed initially",
                                ], "text-sm space-y-1")}
                            </div>
                            <div>
                                <h4 class="font-semibold mb-2">{"Test Day Tips:"}</h4>
                                {bullet_list(&[
                                    "Read questions carefully and completely",
                                    "Manage time effectively across sections",
                                    "Don't spend too much time on difficult questions",
                                    "Use elimination method for MCQs",
                                    "Stay calm and confident throughout",
                                ], "text-sm space-y-1")}
                            </div>
                        </div>
                    </CardContent>
                </Card>
            </div>
        </SectionFrame>
    }
}
