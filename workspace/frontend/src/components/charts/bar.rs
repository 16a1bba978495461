use common::charts::bar_series;
use common::SubtopicEntry;
use plotly::common::Marker;
use plotly::Bar;
use yew::prelude::*;

use super::plot::{base_layout, PlotlyChart};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub entries: Vec<SubtopicEntry>,
    pub color: AttrValue,
    pub height: u32,
    pub visible: bool,
}

/// Question count per subtopic.
#[function_component(SubtopicBarChart)]
pub fn subtopic_bar_chart(props: &Props) -> Html {
    let series = bar_series(&props.entries, &props.color);

    let trace = Bar::new(series.categories, series.values)
        .name("questions")
        .marker(Marker::new().color(series.color));
    let data = match serde_json::to_value(vec![trace]) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to serialize bar chart {}: {}", props.id, e);
            return Html::default();
        }
    };

    let mut layout = base_layout(props.height);
    layout["xaxis"] = serde_json::json!({"tickangle": series.tick_angle, "tickfont": {"size": 10}});
    layout["margin"]["b"] = serde_json::json!(100);

    html! {
        <PlotlyChart
            id={props.id.clone()}
            data={data}
            layout={layout}
            height={props.height}
            visible={props.visible}
        />
    }
}
