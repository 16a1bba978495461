use common::{Catalog, Section};
use std::rc::Rc;
use yew::prelude::*;

use super::section::{bullet_list, SectionFrame};
use crate::components::charts::TrendLineChart;
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, Card, CardContent, CardHeader, CardTitle,
};

const CHART_TYPES: [(&str, &str); 6] = [
    ("fas fa-table text-blue-600", "Table Charts"),
    ("fas fa-chart-bar text-green-600", "Bar Charts"),
    ("fas fa-chart-pie text-yellow-600", "Pie Charts"),
    ("fas fa-chart-line text-red-600", "Line Charts"),
    ("fas fa-chart-area text-purple-600", "Mixed Charts"),
    ("fas fa-file-alt text-gray-600", "Caselet DI"),
];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub visible: bool,
}

#[function_component(DataSection)]
pub fn data_section(props: &Props) -> Html {
    html! {
        <SectionFrame section={Section::Data} visible={props.visible}>
            <div class="space-y-6">
                <Alert>
                    <i class="fas fa-chart-bar"></i>
                    <AlertTitle>{"Data Interpretation Overview"}</AlertTitle>
                    <AlertDescription>
                        {"Data Interpretation questions involve analyzing data presented in various graphical or tabular formats. \
                          While specific Cognizant DI questions weren't provided in the sources, this section outlines the general types and preparation methods."}
                    </AlertDescription>
                </Alert>

                <Card>
                    <CardHeader>
                        <CardTitle>{"Types of Data Interpretation"}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <h4 class="font-semibold mb-3">{"Chart Types:"}</h4>
                                <div class="space-y-2">
                                    { for CHART_TYPES.iter().map(|(icon, name)| html! {
                                        <div class="flex items-center gap-2 p-2 bg-gray-50 rounded">
                                            <i class={*icon}></i>
                                            <span>{*name}</span>
                                        </div>
                                    }) }
                                </div>
                            </div>
                            <div>
                                <h4 class="font-semibold mb-3">{"Key Skills Required:"}</h4>
                                {bullet_list(&[
                                    "Strong mathematical foundations (percentages, ratios, averages)",
                                    "Profit & loss calculations",
                                    "Efficient time management",
                                    "Attention to units and data presentation",
                                    "Pattern recognition in data",
                                    "Quick calculation abilities",
                                ], "space-y-1 text-sm")}
                            </div>
                        </div>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>{"Sample Data Analysis"}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p class="text-sm text-gray-600 mb-4">
                            {"Example of the type of data analysis skills tested in DI sections:"}
                        </p>
                        <TrendLineChart points={props.catalog.trend.clone()} visible={props.visible} />
                        <p class="text-xs text-gray-500 mt-2">
                            {"Sample questions would involve calculating growth rates, comparing periods, finding averages, etc."}
                        </p>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle class="flex items-center gap-2">
                            <i class="fas fa-lightbulb"></i>
                            {"Preparation Strategy for Data Interpretation"}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <h4 class="font-semibold mb-2">{"Practice Areas:"}</h4>
                                {bullet_list(&[
                                    "Regular practice with various chart formats",
                                    "Time-bound practice sessions",
                                    "Focus on accuracy over speed initially",
                                    "Master basic mathematical operations",
                                ], "text-sm space-y-1")}
                            </div>
                            <div>
                                <h4 class="font-semibold mb-2">{"Common Mistakes to Avoid:"}</h4>
                                {bullet_list(&[
                                    "Misreading chart labels and units",
                                    "Calculation errors under time pressure",
                                    "Not double-checking approximations",
                                    "Ignoring data trends and patterns",
                                ], "text-sm space-y-1")}
                            </div>
                        </div>
                    </CardContent>
                </Card>
            </div>
        </SectionFrame>
    }
}
