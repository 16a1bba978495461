use common::{Catalog, CitationMode, CitationRegistry, Section};
use std::rc::Rc;
use yew::prelude::*;

use super::section::SectionFrame;
use crate::components::charts::{CategoryDistributionChart, SkillRadarChart};
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, Card, CardContent, CardHeader, CardTitle, CitationLink,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub citations: Rc<CitationRegistry>,
    pub visible: bool,
}

fn stat_tile(value: String, caption: &'static str, color: &'static str) -> Html {
    html! {
        <div class={classes!("text-center", "p-4", "rounded-lg", format!("bg-{}-50", color))}>
            <div class={classes!("text-2xl", "font-bold", format!("text-{}-600", color))}>{value}</div>
            <div class="text-sm text-gray-600">{caption}</div>
        </div>
    }
}

#[function_component(OverviewSection)]
pub fn overview_section(props: &Props) -> Html {
    let catalog = &props.catalog;
    let headline = &catalog.headline;

    html! {
        <SectionFrame section={Section::Overview} visible={props.visible}>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Card>
                    <CardHeader>
                        <CardTitle class="flex items-center gap-2">
                            <i class="fas fa-chart-bar"></i>
                            {"Question Distribution by Category"}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <CategoryDistributionChart
                            entries={catalog.topic_distribution.clone()}
                            visible={props.visible}
                        />
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle class="flex items-center gap-2">
                            <i class="fas fa-brain"></i>
                            {"Skills Assessment Radar"}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <SkillRadarChart entries={catalog.skill_scores.clone()} visible={props.visible} />
                    </CardContent>
                </Card>

                <Card class="lg:col-span-2">
                    <CardHeader>
                        <CardTitle>{"Key Test Statistics"}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                            {stat_tile(headline.questions_analyzed.clone(), "Total Questions", "blue")}
                            {stat_tile(headline.categories.to_string(), "Main Categories", "green")}
                            {stat_tile(headline.duration_minutes.clone(), "Minutes Duration", "yellow")}
                            {stat_tile(headline.subtopics.clone(), "Sub-topics", "purple")}
                        </div>
                    </CardContent>
                </Card>

                <Alert class="lg:col-span-2">
                    <i class="fas fa-award"></i>
                    <AlertTitle>{"Important Test Information"}</AlertTitle>
                    <AlertDescription>
                        {"The Cognizant aptitude test is a crucial preliminary round in the recruitment process for roles like Cognizant GenC. \
                          The test evaluates candidates across multiple cognitive skills including mathematical ability, logical reasoning, and verbal comprehension."}
                        <CitationLink
                            id="1"
                            mode={CitationMode::Quote}
                            citations={props.citations.clone()}
                            class="ml-2"
                        />
                    </AlertDescription>
                </Alert>
            </div>
        </SectionFrame>
    }
}
