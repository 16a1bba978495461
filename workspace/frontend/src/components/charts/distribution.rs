use common::charts::proportional_slices;
use common::TopicDistributionEntry;
use yew::prelude::*;

use super::plot::{base_layout, PlotlyChart};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entries: Vec<TopicDistributionEntry>,
    pub visible: bool,
}

/// Pie of question counts per category.
#[function_component(CategoryDistributionChart)]
pub fn category_distribution_chart(props: &Props) -> Html {
    let slices = proportional_slices(&props.entries);

    let trace = serde_json::json!([{
        "type": "pie",
        "labels": slices.iter().map(|s| s.name.clone()).collect::<Vec<_>>(),
        "values": slices.iter().map(|s| s.fraction).collect::<Vec<_>>(),
        "customdata": slices.iter().map(|s| s.value).collect::<Vec<_>>(),
        "text": slices.iter().map(|s| s.label.clone()).collect::<Vec<_>>(),
        "marker": {"colors": slices.iter().map(|s| s.color.clone()).collect::<Vec<_>>()},
        "textinfo": "text",
        "hovertemplate": "%{label}: %{customdata} questions<extra></extra>",
        "sort": false,
        "direction": "clockwise",
    }]);

    html! {
        <PlotlyChart
            id="chart-category-distribution"
            data={trace}
            layout={base_layout(300)}
            height={300}
            visible={props.visible}
        />
    }
}
