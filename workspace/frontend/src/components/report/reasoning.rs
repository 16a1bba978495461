use common::{Catalog, CitationRegistry, ReportState, Section, TopicKey};
use std::rc::Rc;
use yew::prelude::*;

use super::section::SectionFrame;
use super::topic::ExpandableTopicCard;
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

fn topic_list(heading: &'static str, topics: &[String]) -> Html {
    html! {
        <div>
            <h4 class="font-semibold mb-2">{heading}</h4>
            <ul class="space-y-1">
                { for topics.iter().map(|topic| html! { <li>{format!("• {}", topic)}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(ReasoningSection)]
pub fn reasoning_section(props: &Props) -> Html {
    let catalog = &props.catalog;

    html! {
        <SectionFrame section={Section::Reasoning} visible={props.visible}>
            <div class="space-y-6">
                <Card>
                    <CardHeader>
                        <CardTitle>{"Logical Reasoning Topics Distribution"}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <SubtopicBarChart
                            id="chart-reasoning-topics"
                            entries={catalog.reasoning_topics.clone()}
                            color="#10b981"
                            height={350}
                            visible={props.visible}
                        />
                    </CardContent>
                </Card>

                <div class="grid gap-4">
                    { for catalog.reasoning_samples.iter().map(|topic| html! {
                        <ExpandableTopicCard
                            key={topic.key.clone()}
                            topic={topic.clone()}
                            expanded={props.state.is_expanded(&topic.key)}
                            on_toggle={props.on_toggle.clone()}
                            citations={props.citations.clone()}
                        />
                    }) }
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle>{"Complete Logical Reasoning Topics"}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 text-sm">
                            {topic_list("Core Topics:", &catalog.reasoning_core_topics)}
                            {topic_list("Advanced Topics:", &catalog.reasoning_advanced_topics)}
                        </div>
                    </CardContent>
                </Card>
            </div>
        </SectionFrame>
    }
}
