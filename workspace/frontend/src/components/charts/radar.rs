use common::charts::radar_polygon;
use common::SkillScoreEntry;
use yew::prelude::*;

use super::plot::{base_layout, PlotlyChart};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entries: Vec<SkillScoreEntry>,
    pub visible: bool,
}

#[function_component(SkillRadarChart)]
pub fn skill_radar_chart(props: &Props) -> Html {
    let polygon = radar_polygon(&props.entries);

    let trace = serde_json::json!([{
        "type": "scatterpolar",
        "name": "Skills",
        "r": polygon.closed_radii(),
        "theta": polygon.closed_axes(),
        "text": polygon.closed_scores(),
        "fill": "toself",
        "fillcolor": "rgba(59,130,246,0.3)",
        "line": {"color": "#3b82f6", "width": 2},
        "hovertemplate": "%{theta}: %{text}<extra></extra>",
    }]);

    let mut layout = base_layout(300);
    layout["polar"] = serde_json::json!({
        "radialaxis": {"range": [0.0, 1.0], "showticklabels": false, "angle": 90},
        "angularaxis": {"tickfont": {"size": 10}},
    });

    html! {
        <PlotlyChart
            id="chart-skill-radar"
            data={trace}
            layout={layout}
            height={300}
            visible={props.visible}
        />
    }
}
