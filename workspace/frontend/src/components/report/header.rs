use common::Headline;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub headline: Headline,
    pub banner: AttrValue,
}

#[function_component(ReportHeader)]
pub fn report_header(props: &Props) -> Html {
    html! {
        <div class="text-center py-8 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg">
            <img src={props.banner.clone()} alt="Cognizant GenC Banner" class="mx-auto mb-4 max-w-xs rounded-lg shadow-lg" />
            <h1 class="text-3xl sm:text-4xl font-bold mb-2">{"Cognizant Aptitude Test Questions"}</h1>
            <p class="text-lg sm:text-xl opacity-90">{"Comprehensive Visual Report & Preparation Guide"}</p>
            <div class="flex flex-wrap justify-center gap-4 mt-4">
                <div class="bg-white bg-opacity-20 px-4 py-2 rounded-full">
                    <span class="flex items-center gap-2">
                        <i class="fas fa-bullseye"></i>
                        {format!("{} Questions Analyzed", props.headline.questions_analyzed)}
                    </span>
                </div>
                <div class="bg-white bg-opacity-20 px-4 py-2 rounded-full">
                    <span class="flex items-center gap-2">
                        <i class="fas fa-users"></i>
                        {format!("{} Major Categories", props.headline.categories)}
                    </span>
                </div>
            </div>
        </div>
    }
}
