use common::{CitationMode, CitationRegistry, Difficulty, ExpandableTopic, SampleQuestion, TopicKey};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::ui::{Card, CardContent, CardHeader, CardTitle, CitationLink};

pub fn difficulty_badge(difficulty: Difficulty) -> Html {
    let colors = match difficulty {
        Difficulty::Easy => "bg-green-100 text-green-800",
        Difficulty::Medium => "bg-yellow-100 text-yellow-800",
        Difficulty::Hard => "bg-red-100 text-red-800",
    };
    html! {
        <span class={classes!(colors, "px-2", "py-1", "rounded")}>{difficulty.label()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SampleProps {
    pub sample: SampleQuestion,
    pub citations: Rc<CitationRegistry>,
}

#[function_component(SampleQuestionView)]
pub fn sample_question_view(props: &SampleProps) -> Html {
    let sample = &props.sample;
    let options_class = if sample.single_column() {
        "grid grid-cols-1 gap-1 text-sm"
    } else {
        "grid grid-cols-2 gap-2 text-sm"
    };

    html! {
        <div class="bg-gray-50 p-4 rounded-lg">
            <h4 class="font-semibold mb-2">{&sample.heading}</h4>
            if !sample.prompt.is_empty() {
                <p class="text-sm mb-2">{&sample.prompt}</p>
            }
            if !sample.statements.is_empty() {
                <>
                    <p class="text-sm mb-2"><strong>{"Statements:"}</strong></p>
                    <ul class="text-sm mb-2 ml-4 list-disc">
                        { for sample.statements.iter().map(|s| html! { <li>{s}</li> }) }
                    </ul>
                </>
            }
            if !sample.conclusions.is_empty() {
                <>
                    <p class="text-sm mb-2"><strong>{"Conclusions:"}</strong></p>
                    <ul class="text-sm mb-2 ml-4 list-disc">
                        { for sample.conclusions.iter().map(|c| html! { <li>{c}</li> }) }
                    </ul>
                </>
            }
            if !sample.options.is_empty() {
                <div class={options_class}>
                    { for sample.options.iter().map(|o| html! { <div>{o}</div> }) }
                </div>
            }
            if !sample.columns.is_empty() {
                <div class="grid grid-cols-2 gap-4 text-sm">
                    { for sample.columns.iter().enumerate().map(|(i, column)| html! {
                        <div>
                            <p><strong>{format!("Column {}:", i + 1)}</strong></p>
                            <ul>
                                { for column.iter().map(|item| html! { <li>{item}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            }
            if let Some(answer) = &sample.answer {
                <p class="text-xs mt-2">{format!("Answer: {}", answer)}</p>
            }
            <CitationLink
                id={sample.citation.clone()}
                mode={CitationMode::Quote}
                citations={props.citations.clone()}
                class="mt-2 text-xs inline-block"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub topic: ExpandableTopic,
    pub expanded: bool,
    pub on_toggle: Callback<TopicKey>,
    pub citations: Rc<CitationRegistry>,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
}

/// Topic card whose header flips its own expanded flag.
#[function_component(ExpandableTopicCard)]
pub fn expandable_topic_card(props: &Props) -> Html {
    let onclick = {
        let key = props.topic.key.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(key.clone()))
    };

    let chevron = if props.expanded { "fas fa-chevron-up" } else { "fas fa-chevron-down" };

    html! {
        <Card>
            <CardHeader class="cursor-pointer" onclick={onclick}>
                <CardTitle class="flex items-center justify-between">
                    <span class="flex items-center gap-2">
                        if let Some(icon) = &props.icon {
                            <i class={icon.to_string()}></i>
                        }
                        {&props.topic.title}
                    </span>
                    <i class={chevron}></i>
                </CardTitle>
            </CardHeader>
            if props.expanded {
                <CardContent>
                    <SampleQuestionView
                        sample={props.topic.sample.clone()}
                        citations={props.citations.clone()}
                    />
                </CardContent>
            }
        </Card>
    }
}
