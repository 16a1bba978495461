use common::charts::trend_series;
use common::TrendPoint;
use plotly::common::{Line, LineShape, Mode};
use plotly::Scatter;
use yew::prelude::*;

use super::plot::{base_layout, PlotlyChart};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub points: Vec<TrendPoint>,
    pub visible: bool,
}

/// Demonstration sales/profit chart for the data-interpretation section.
#[function_component(TrendLineChart)]
pub fn trend_line_chart(props: &Props) -> Html {
    let traces: Vec<_> = trend_series(&props.points)
        .into_iter()
        .map(|series| {
            Scatter::new(series.x, series.y)
                .mode(Mode::LinesMarkers)
                .name(&series.name)
                .line(Line::new().color(series.color).width(2.0).shape(LineShape::Spline))
        })
        .collect();

    let data = match serde_json::to_value(traces) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to serialize trend chart: {}", e);
            return Html::default();
        }
    };

    let mut layout = base_layout(300);
    layout["yaxis"] = serde_json::json!({"showgrid": true, "gridcolor": "#eee"});

    html! {
        <PlotlyChart
            id="chart-trend"
            data={data}
            layout={layout}
            height={300}
            visible={props.visible}
        />
    }
}
