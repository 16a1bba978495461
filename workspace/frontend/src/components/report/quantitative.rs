use common::{Catalog, CitationRegistry, ReportState, Section, TopicKey};
use std::rc::Rc;
use yew::prelude::*;

use super::section::SectionFrame;
use super::topic::{difficulty_badge, ExpandableTopicCard};
use crate::components::charts::SubtopicBarChart;
use crate::components::ui::{Card, CardContent, CardHeader, CardTitle};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub citations: Rc<CitationRegistry>,
    pub visible: bool,
    pub state: ReportState,
    pub on_toggle: Callback<TopicKey>,
}

#[function_component(QuantitativeSection)]
pub fn quantitative_section(props: &Props) -> Html {
    let catalog = &props.catalog;

    html! {
        <SectionFrame section={Section::Quantitative} visible={props.visible}>
            <div class="space-y-6">
                <Card>
                    <CardHeader>
                        <CardTitle>{"Quantitative Topics Distribution"}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <SubtopicBarChart
                            id="chart-quantitative-topics"
                            entries={catalog.quantitative_topics.clone()}
                            color="#3b82f6"
                            height={400}
                            visible={props.visible}
                        />
                    </CardContent>
                </Card>

                <div class="grid gap-4">
                    { for catalog.quantitative_samples.iter().map(|topic| {
                        // Only the first topic carries an icon in its header
                        let icon = (topic.key == "time-distance").then(|| AttrValue::from("fas fa-clock"));
                        html! {
                            <ExpandableTopicCard
                                key={topic.key.clone()}
                                topic={topic.clone()}
                                expanded={props.state.is_expanded(&topic.key)}
                                on_toggle={props.on_toggle.clone()}
                                citations={props.citations.clone()}
                                icon={icon}
                            />
                        }
                    }) }
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle>{"Complete Topics Coverage"}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="overflow-x-auto">
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="border-b">
                                        <th class="text-left p-2">{"Topic"}</th>
                                        <th class="text-left p-2">{"Questions"}</th>
                                        <th class="text-left p-2">{"Difficulty"}</th>
                                        <th class="text-left p-2">{"Key Concepts"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for catalog.quantitative_coverage.iter().map(|row| html! {
                                        <tr class="border-b">
                                            <td class="p-2">{&row.topic}</td>
                                            <td class="p-2">{row.questions}</td>
                                            <td class="p-2">{difficulty_badge(row.difficulty)}</td>
                                            <td class="p-2">{&row.key_concepts}</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </CardContent>
                </Card>
            </div>
        </SectionFrame>
    }
}
